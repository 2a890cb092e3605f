//! Single 128-bit AES lane and the raw AES round primitive.
//!
//! The round function used throughout this crate is the full AES round
//! (`SubBytes`, `ShiftRows`, `MixColumns`, `AddRoundKey`) — equivalent to the
//! AES-NI `AESENC` instruction, never the "last round" variant that omits
//! `MixColumns`. We delegate to [`aes::hazmat`] rather than hand-rolling
//! S-boxes and Galois-field multiplies: it already picks the right backend
//! (AES-NI, ARMv8 crypto extensions, or a constant-time software fallback)
//! for the target at hand.

use aes::Block as AesBlock;
use aes::hazmat::cipher_round;

/// One 128-bit AES state, 16 bytes, no wrapper beyond the array itself.
pub(crate) type Lane = [u8; 16];

pub(crate) const ZERO_LANE: Lane = [0u8; 16];

#[inline]
pub(crate) fn lane_xor(a: Lane, b: Lane) -> Lane {
    let mut out = ZERO_LANE;
    for i in 0..16 {
        out[i] = a[i] ^ b[i];
    }
    out
}

/// One full AES round under an arbitrary round key.
///
/// This is the building block `aes_modified` (finalization) relies on: a
/// round with a zero key still runs `MixColumns`, unlike a standard AES
/// final-round encryption.
#[inline]
pub(crate) fn aes_round(state: Lane, round_key: Lane) -> Lane {
    let mut block = AesBlock::clone_from_slice(&state);
    let key = AesBlock::clone_from_slice(&round_key);
    cipher_round(&mut block, &key);
    let mut out = ZERO_LANE;
    out.copy_from_slice(block.as_slice());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aes_round_is_deterministic() {
        let a = aes_round([1u8; 16], [2u8; 16]);
        let b = aes_round([1u8; 16], [2u8; 16]);
        assert_eq!(a, b);
    }

    #[test]
    fn aes_round_changes_state() {
        let out = aes_round(ZERO_LANE, ZERO_LANE);
        assert_ne!(out, ZERO_LANE);
    }

    #[test]
    fn aes_round_depends_on_key() {
        let a = aes_round([9u8; 16], [1u8; 16]);
        let b = aes_round([9u8; 16], [2u8; 16]);
        assert_ne!(a, b);
    }
}
