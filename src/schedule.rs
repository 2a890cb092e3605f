//! Key schedule / context builder.
//!
//! From a 16-byte master key we derive, once, everything a `mac` call
//! needs: the nine-block absorption seed, the eighteen absorption-time
//! subkeys, and the two scalar AES-128 keys used to mix the nonce and emit
//! the tag. The degree `D` is baked into the domain-separation bytes here —
//! it is the only place the three variants actually diverge.

use crate::aes128::Aes128Key;
use crate::block::Block;

/// Immutable, reusable key schedule for one LeMac variant.
///
/// Built once by [`crate::init`], consumed by any number of
/// [`crate::mac`] calls. Cheap to share across threads: nothing here is
/// ever mutated after construction.
#[derive(Clone)]
pub struct Context<const D: usize> {
    pub(crate) init_state: [Block<D>; 9],
    pub(crate) subkeys: [Block<D>; 18],
    pub(crate) nonce_key: Aes128Key,
    pub(crate) finalize_key: Aes128Key,
}

/// `bytes[0..8] = index (LE u64), bytes[8..14] = 0, bytes[14] = lane,
/// bytes[15] = D - 1`. For `D == 1, lane == 0` this collapses to the plain
/// little-endian encoding of `index` — no separate code path is needed for
/// the single-lane case.
fn position_input(index: u64, lane: u8, degree_minus_one: u8) -> [u8; 16] {
    let mut buf = [0u8; 16];
    buf[0..8].copy_from_slice(&index.to_le_bytes());
    buf[14] = lane;
    buf[15] = degree_minus_one;
    buf
}

fn wide_block_from_position<const D: usize>(ek: &Aes128Key, index: u64) -> Block<D> {
    Block::from_fn(|lane| ek.encrypt(&position_input(index, lane as u8, (D - 1) as u8)))
}

/// Builds the immutable [`Context`] for a master key.
///
/// Pure and total: every key produces a valid context, there is no failure
/// mode.
pub fn init<const D: usize>(key: &[u8; 16]) -> Context<D> {
    let ek = Aes128Key::new(key);

    let init_state = core::array::from_fn(|i| wide_block_from_position::<D>(&ek, i as u64));
    let subkeys = core::array::from_fn(|i| wide_block_from_position::<D>(&ek, (i + 9) as u64));

    // These two auxiliary inputs use lane = 0, D = 0 regardless of the
    // variant's actual degree — the one constant shared verbatim across all
    // three variants.
    let aux0 = ek.encrypt(&position_input(27, 0, 0));
    let aux1 = ek.encrypt(&position_input(28, 0, 0));

    Context {
        init_state,
        subkeys,
        nonce_key: Aes128Key::new(&aux0),
        finalize_key: Aes128Key::new(&aux1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_input_collapses_for_d1() {
        let scalar = position_input(5, 0, 0);
        let mut expected = [0u8; 16];
        expected[0..8].copy_from_slice(&5u64.to_le_bytes());
        assert_eq!(scalar, expected);
    }

    #[test]
    fn init_is_deterministic() {
        let a = init::<1>(&[7u8; 16]);
        let b = init::<1>(&[7u8; 16]);
        assert_eq!(a.init_state, b.init_state);
        assert_eq!(a.subkeys, b.subkeys);
    }

    #[test]
    fn init_differs_across_degrees() {
        let d1 = init::<1>(&[0u8; 16]);
        let d2 = init::<2>(&[0u8; 16]);
        // Different wide-block widths, but lane 0 of D2's init_state must
        // also differ from D1's block since the D-field is mixed in.
        let mut d1_bytes = [0u8; 16];
        d1.init_state[0].to_bytes(&mut d1_bytes);
        let mut d2_bytes = [0u8; 32];
        d2.init_state[0].to_bytes(&mut d2_bytes);
        assert_ne!(&d1_bytes[..], &d2_bytes[0..16]);
    }
}
