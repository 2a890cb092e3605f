//! Wide block: `D` independent AES lanes processed lanewise.
//!
//! For `D == 1` this is a plain 128-bit AES block. For `D ∈ {2, 4}` it
//! models the data a wide-SIMD AES pipeline would hold in one register —
//! `D` AES states laid out back to back, lane 0 first. Every operation here
//! is defined lanewise: there is no mixing between lanes anywhere in this
//! type, only in the round function that drives absorption (`crate::absorb`).

use crate::lane::{self, Lane, ZERO_LANE};

/// `D` independent 128-bit AES states, in lane order `0, 1, …, D-1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block<const D: usize> {
    lanes: [Lane; D],
}

impl<const D: usize> Block<D> {
    /// The all-zero block.
    pub fn zero() -> Self {
        Self { lanes: [ZERO_LANE; D] }
    }

    pub(crate) fn from_fn(mut f: impl FnMut(usize) -> Lane) -> Self {
        let mut lanes = [ZERO_LANE; D];
        for (i, lane) in lanes.iter_mut().enumerate() {
            *lane = f(i);
        }
        Self { lanes }
    }

    /// Lanewise XOR.
    pub fn xor(self, rhs: Self) -> Self {
        Self::from_fn(|i| lane::lane_xor(self.lanes[i], rhs.lanes[i]))
    }

    /// One full AES round (`SubBytes`, `ShiftRows`, `MixColumns`,
    /// `AddRoundKey`), applied independently to every lane against the
    /// matching lane of `round_key`.
    pub fn aes_round(self, round_key: Self) -> Self {
        Self::from_fn(|i| lane::aes_round(self.lanes[i], round_key.lanes[i]))
    }

    /// Deserializes `16 * D` bytes, lane 0 first, into a wide block.
    pub fn from_bytes(buf: &[u8]) -> Self {
        assert_eq!(buf.len(), 16 * D, "wide block needs exactly 16*D bytes");
        Self::from_fn(|i| {
            let mut lane = ZERO_LANE;
            lane.copy_from_slice(&buf[i * 16..i * 16 + 16]);
            lane
        })
    }

    /// Serializes the block into `out`, which must be exactly `16 * D` bytes.
    pub fn to_bytes(self, out: &mut [u8]) {
        assert_eq!(out.len(), 16 * D, "wide block needs exactly 16*D bytes");
        for (i, lane) in self.lanes.iter().enumerate() {
            out[i * 16..i * 16 + 16].copy_from_slice(lane);
        }
    }

    /// The individual lanes, lane 0 first.
    pub(crate) fn lanes(&self) -> &[Lane; D] {
        &self.lanes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_xor_zero_is_zero() {
        let z = Block::<2>::zero();
        assert_eq!(z.xor(z), z);
    }

    #[test]
    fn roundtrip_bytes() {
        let bytes: [u8; 32] = core::array::from_fn(|i| i as u8);
        let b = Block::<2>::from_bytes(&bytes);
        let mut out = [0u8; 32];
        b.to_bytes(&mut out);
        assert_eq!(bytes, out);
    }

    #[test]
    fn lanes_are_independent() {
        // lane 1 must not influence lane 0's round output.
        let mut buf_a = [0u8; 32];
        buf_a[16] = 0xff;
        let mut buf_b = [0u8; 32];
        buf_b[16] = 0x01;

        let a = Block::<2>::from_bytes(&buf_a);
        let b = Block::<2>::from_bytes(&buf_b);
        let key = Block::<2>::zero();

        let ra = a.aes_round(key);
        let rb = b.aes_round(key);

        let mut ra_bytes = [0u8; 32];
        ra.to_bytes(&mut ra_bytes);
        let mut rb_bytes = [0u8; 32];
        rb.to_bytes(&mut rb_bytes);

        assert_eq!(&ra_bytes[0..16], &rb_bytes[0..16]);
    }
}
