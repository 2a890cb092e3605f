//! Finalization.
//!
//! Collapses the nine-block absorption state into a single wide block using
//! a modified AES ("every round keeps `MixColumns`, including the last,
//! which also uses a zero key"), folds the `D` lanes down to 128 bits, mixes
//! in the nonce, and emits the tag under a final ordinary AES-128 encryption.

use crate::absorb::State;
use crate::block::Block;
use crate::schedule::Context;

/// The 11-round "modified AES": 10 full rounds (the 0th expressed as a
/// plain XOR) followed by an 11th full round under an all-zero key. This is
/// deliberately not standard AES-128 encryption — the final round keeps
/// `MixColumns`, which a stock AES encrypt routine would omit.
fn aes_modified<const D: usize>(subkey_window: &[Block<D>], x: Block<D>) -> Block<D> {
    debug_assert_eq!(subkey_window.len(), 10);
    let mut y = x.xor(subkey_window[0]);
    for key in &subkey_window[1..10] {
        y = y.aes_round(*key);
    }
    y.aes_round(Block::zero())
}

pub(crate) fn finalize<const D: usize>(
    ctx: &Context<D>,
    state: &State<D>,
    nonce: &[u8; 16],
) -> [u8; 16] {
    let mut t = aes_modified(&ctx.subkeys[0..10], state.s[0]);
    for i in 1..9 {
        t = t.xor(aes_modified(&ctx.subkeys[i..i + 10], state.s[i]));
    }

    let mut t128 = [0u8; 16];
    for lane in t.lanes() {
        for (out, byte) in t128.iter_mut().zip(lane.iter()) {
            *out ^= byte;
        }
    }

    let n_enc = ctx.nonce_key.encrypt(nonce);
    for i in 0..16 {
        t128[i] ^= nonce[i] ^ n_enc[i];
    }

    ctx.finalize_key.encrypt(&t128)
}
