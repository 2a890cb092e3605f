//! # LeMac — AES-round-based keyed MAC
//!
//! An implementation of the LeMac family of message authentication codes
//! from "Fast AES-Based Universal Hash Functions and MACs" (ToSC): a
//! 128-bit, nonce-taking MAC built entirely from the AES round function,
//! plus two wide-lane variants (`x2`, `x4`) that process 2 or 4 lanes per
//! round to exploit wide SIMD/hardware AES pipelines.
//!
//! ## Variants
//!
//! The three variants share one generic engine, parameterized at compile
//! time by a lane count `D` (a const generic), and differ only in `D` and
//! the domain-separation bytes mixed into their key schedules — an `x2` tag
//! is unrelated to an `x1` tag for the same key, nonce, and message.
//!
//! | module | parallelism | superblock size |
//! |--------|-------------|------------------|
//! | [`x1`] | 1           | 64 bytes         |
//! | [`x2`] | 2           | 128 bytes        |
//! | [`x4`] | 4           | 256 bytes        |
//!
//! ## Example
//!
//! ```rust
//! use lemac::x1;
//!
//! let ctx = x1::init(&[0u8; 16]);
//! let tag = x1::mac(&ctx, b"message to authenticate", &[0u8; 16]);
//! assert_eq!(tag.len(), 16);
//! ```
//!
//! ## What this crate does not do
//!
//! No streaming/incremental absorption, no truncated or variable-length
//! tags, no associated data, no rekeying, and no tag verification — a
//! verifier must compare tags with a constant-time equality routine of its
//! own (e.g. `subtle::ConstantTimeEq`); that check is deliberately outside
//! this crate's contract.
//!
//! ## `no_std`
//!
//! The engine itself never allocates, so the `std` feature (on by default)
//! is only needed for the `capi` module and for running the test suite.

#![cfg_attr(not(feature = "std"), no_std)]

mod absorb;
mod aes128;
mod block;
mod finalize;
mod lane;
pub mod params;
mod schedule;

#[cfg(all(feature = "capi", feature = "std"))]
pub mod capi;

pub use block::Block;
pub use params::{KEY_SIZE, NONCE_SIZE, TAG_SIZE, block_size};
pub use schedule::Context;

/// Builds the immutable schedule for a given degree. Most callers want the
/// [`x1`], [`x2`], or [`x4`] convenience modules instead of naming `D`
/// directly.
pub fn init<const D: usize>(key: &[u8; KEY_SIZE]) -> Context<D> {
    schedule::init(key)
}

/// Runs absorption then finalization. Never mutates `ctx`; safe to call
/// concurrently from many threads against the same `Context`.
pub fn mac<const D: usize>(
    ctx: &Context<D>,
    msg: &[u8],
    nonce: &[u8; NONCE_SIZE],
) -> [u8; TAG_SIZE] {
    let state = absorb::absorb(ctx, msg);
    finalize::finalize(ctx, &state, nonce)
}

/// `parallelism = 1`, 64-byte superblocks — the baseline LeMac.
pub mod x1 {
    use super::*;

    pub const PARALLELISM: usize = 1;
    pub const BLOCK_SIZE: usize = block_size(PARALLELISM);

    pub type LeMac = Context<1>;

    pub fn init(key: &[u8; KEY_SIZE]) -> LeMac {
        super::init::<1>(key)
    }

    pub fn mac(ctx: &LeMac, msg: &[u8], nonce: &[u8; NONCE_SIZE]) -> [u8; TAG_SIZE] {
        super::mac::<1>(ctx, msg, nonce)
    }
}

/// `parallelism = 2`, 128-byte superblocks — LeMac-X2.
pub mod x2 {
    use super::*;

    pub const PARALLELISM: usize = 2;
    pub const BLOCK_SIZE: usize = block_size(PARALLELISM);

    pub type LeMacX2 = Context<2>;

    pub fn init(key: &[u8; KEY_SIZE]) -> LeMacX2 {
        super::init::<2>(key)
    }

    pub fn mac(ctx: &LeMacX2, msg: &[u8], nonce: &[u8; NONCE_SIZE]) -> [u8; TAG_SIZE] {
        super::mac::<2>(ctx, msg, nonce)
    }
}

/// `parallelism = 4`, 256-byte superblocks — LeMac-X4.
pub mod x4 {
    use super::*;

    pub const PARALLELISM: usize = 4;
    pub const BLOCK_SIZE: usize = block_size(PARALLELISM);

    pub type LeMacX4 = Context<4>;

    pub fn init(key: &[u8; KEY_SIZE]) -> LeMacX4 {
        super::init::<4>(key)
    }

    pub fn mac(ctx: &LeMacX4, msg: &[u8], nonce: &[u8; NONCE_SIZE]) -> [u8; TAG_SIZE] {
        super::mac::<4>(ctx, msg, nonce)
    }
}
