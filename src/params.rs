//! Crate-wide size constants shared by every variant.

/// Key size in bytes, fixed for all variants.
pub const KEY_SIZE: usize = 16;

/// Nonce size in bytes, fixed for all variants.
pub const NONCE_SIZE: usize = 16;

/// Tag size in bytes, fixed for all variants.
pub const TAG_SIZE: usize = 16;

/// Absorption superblock size, in bytes, for a given degree.
pub const fn block_size(degree: usize) -> usize {
    64 * degree
}
