//! Standard, unmodified AES-128 encryption.
//!
//! Used only for deriving the key schedule (encrypting the
//! domain-separation inputs under the master key) and for mixing the nonce
//! and emitting the tag at finalization. This is ordinary 10-round
//! AES-128 with the standard final round (no `MixColumns` on round 10) —
//! distinct from the modified round in [`crate::lane::aes_round`], which
//! always keeps `MixColumns`.

use aes::Aes128;
use aes::Block as AesBlock;
use cipher::{BlockEncrypt, KeyInit};

/// An expanded AES-128 encryption schedule, reusable across many blocks.
#[derive(Clone)]
pub(crate) struct Aes128Key(Aes128);

impl Aes128Key {
    pub(crate) fn new(key: &[u8; 16]) -> Self {
        Self(Aes128::new_from_slice(key).expect("AES-128 key is exactly 16 bytes"))
    }

    pub(crate) fn encrypt(&self, block: &[u8; 16]) -> [u8; 16] {
        let mut b = AesBlock::clone_from_slice(block);
        self.0.encrypt_block(&mut b);
        let mut out = [0u8; 16];
        out.copy_from_slice(b.as_slice());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encrypt_is_deterministic() {
        let k = Aes128Key::new(&[0u8; 16]);
        assert_eq!(k.encrypt(&[0u8; 16]), k.encrypt(&[0u8; 16]));
    }

    #[test]
    fn different_keys_diverge() {
        let a = Aes128Key::new(&[1u8; 16]).encrypt(&[0u8; 16]);
        let b = Aes128Key::new(&[2u8; 16]).encrypt(&[0u8; 16]);
        assert_ne!(a, b);
    }
}
