//! Absorption engine.
//!
//! Consumes the message in `64 * D`-byte superblocks, driving the nine-block
//! state `S` and the four-block rolling register `(rr, r0, r1, r2)` through
//! a fixed round function. Finishes with one padded superblock and four
//! blank rounds, regardless of message length.

use crate::block::Block;
use crate::schedule::Context;

/// The nine-block absorption state, `S[0..9]`.
#[derive(Clone, Copy)]
pub(crate) struct State<const D: usize> {
    pub(crate) s: [Block<D>; 9],
}

/// The four-block rolling register FIFO feeding `S[3]`.
#[derive(Clone, Copy)]
struct RollingRegister<const D: usize> {
    rr: Block<D>,
    r0: Block<D>,
    r1: Block<D>,
    r2: Block<D>,
}

impl<const D: usize> RollingRegister<D> {
    fn zero() -> Self {
        let z = Block::zero();
        Self { rr: z, r0: z, r1: z, r2: z }
    }
}

/// Largest superblock this crate ever needs (`D == 4`): `64 * 4` bytes.
/// Padding and the blank rounds use a fixed stack buffer of this size for
/// every degree, so absorption never allocates.
const MAX_SUPERBLOCK_BYTES: usize = 64 * 4;

/// One round of the absorption automaton.
///
/// Every `S[k]` read below is the value from *before* this round — `t`
/// snapshots `S[8]` up front because `S[0]`'s update needs the pre-round
/// `S[8]`, and every other update is computed into a fresh array so the
/// top-down listing below cannot be misread as in-place mutation.
fn round<const D: usize>(state: &mut State<D>, reg: &mut RollingRegister<D>, superblock: &[u8]) {
    let lane_bytes = 16 * D;
    debug_assert_eq!(superblock.len(), 4 * lane_bytes);

    let m0 = Block::<D>::from_bytes(&superblock[0..lane_bytes]);
    let m1 = Block::<D>::from_bytes(&superblock[lane_bytes..2 * lane_bytes]);
    let m2 = Block::<D>::from_bytes(&superblock[2 * lane_bytes..3 * lane_bytes]);
    let m3 = Block::<D>::from_bytes(&superblock[3 * lane_bytes..4 * lane_bytes]);

    let s = state.s;
    let t = s[8];

    let new_s = [
        s[0].xor(t).xor(m2),
        s[0].aes_round(m3),
        s[1].aes_round(m3),
        s[2].aes_round(reg.r1.xor(reg.r2)),
        s[3].aes_round(m0),
        s[4].aes_round(m0),
        s[5].aes_round(m1),
        s[6].aes_round(m1),
        s[7].aes_round(m3),
    ];
    state.s = new_s;

    let new_r0 = reg.rr.xor(m1);
    reg.r2 = reg.r1;
    reg.r1 = reg.r0;
    reg.r0 = new_r0;
    reg.rr = m2;
}

/// Runs the absorption procedure over the whole message and returns the
/// post-absorption state: full superblocks consumed in order, then one
/// padded superblock, then four blank rounds.
pub(crate) fn absorb<const D: usize>(ctx: &Context<D>, msg: &[u8]) -> State<D> {
    let superblock_len = 64 * D;
    let mut state = State { s: ctx.init_state };
    let mut reg = RollingRegister::zero();

    let mut offset = 0;
    while msg.len() - offset >= superblock_len {
        round(&mut state, &mut reg, &msg[offset..offset + superblock_len]);
        offset += superblock_len;
    }

    // Padding: remaining 0 <= r < superblock_len bytes, zero-extended, with
    // a single 0x01 byte appended at position r. superblock_len > r always
    // holds, so position r is always inside the buffer.
    let mut pad = [0u8; MAX_SUPERBLOCK_BYTES];
    let remainder = &msg[offset..];
    pad[..remainder.len()].copy_from_slice(remainder);
    pad[remainder.len()] = 0x01;
    round(&mut state, &mut reg, &pad[..superblock_len]);

    let blank = [0u8; MAX_SUPERBLOCK_BYTES];
    for _ in 0..4 {
        round(&mut state, &mut reg, &blank[..superblock_len]);
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::init;

    fn flatten_state(state: State<1>) -> [u8; 16 * 9] {
        state.s.map(|lane| {
            let mut o = [0u8; 16];
            lane.to_bytes(&mut o);
            o
        })
        .concat()
        .try_into()
        .unwrap()
    }

    #[test]
    fn absorb_is_deterministic() {
        let ctx = init::<1>(&[0u8; 16]);
        let a = absorb(&ctx, b"hello world");
        let b = absorb(&ctx, b"hello world");
        assert_eq!(flatten_state(a), flatten_state(b));
    }

    #[test]
    fn empty_message_does_not_panic() {
        let ctx = init::<1>(&[0u8; 16]);
        let _ = absorb(&ctx, b"");
    }

    #[test]
    fn boundary_lengths_do_not_panic() {
        let ctx = init::<1>(&[0u8; 16]);
        for len in [0usize, 1, 63, 64, 65, 3 * 64 + 17] {
            let msg = vec![0xABu8; len];
            let _ = absorb(&ctx, &msg);
        }
    }

    #[test]
    fn padding_is_injective_on_trailing_zero_byte() {
        let ctx = init::<1>(&[0u8; 16]);
        let a = absorb(&ctx, &[0u8; 16]);
        let mut extended = [0u8; 17];
        extended[..16].copy_from_slice(&[0u8; 16]);
        let b = absorb(&ctx, &extended);

        assert_ne!(flatten_state(a), flatten_state(b));
    }
}
