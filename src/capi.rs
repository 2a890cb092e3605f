//! C ABI surface, gated behind the `capi` feature.
//!
//! Opaque boxed handles, raw pointer/length arguments, null checks that
//! return an error code instead of panicking. Three non-allocating
//! functions per variant — `init`, `mac`, `free` — operating entirely on
//! caller-owned fixed-size buffers.

use core::slice;
use std::boxed::Box;

use crate::{Context, NONCE_SIZE, TAG_SIZE, x1, x2, x4};

macro_rules! variant_capi {
    ($degree:literal, $module:ident, $init_fn:ident, $mac_fn:ident, $free_fn:ident) => {
        /// Builds a context from a 16-byte key. Writes a heap-boxed handle
        /// to `*out_ctx` and returns 0, or returns -1 without writing
        /// anything if a pointer is null.
        #[unsafe(no_mangle)]
        pub extern "C" fn $init_fn(key: *const u8, out_ctx: *mut *mut Context<$degree>) -> i32 {
            if key.is_null() || out_ctx.is_null() {
                return -1;
            }
            let mut key_arr = [0u8; 16];
            key_arr.copy_from_slice(unsafe { slice::from_raw_parts(key, 16) });
            let boxed = Box::new($module::init(&key_arr));
            unsafe { *out_ctx = Box::into_raw(boxed) };
            0
        }

        /// Computes a tag. `tag_out` must point at `TAG_SIZE` writable
        /// bytes. Returns 0 on success, -1 if any required pointer is null.
        #[unsafe(no_mangle)]
        pub extern "C" fn $mac_fn(
            ctx: *const Context<$degree>,
            msg: *const u8,
            msg_len: usize,
            nonce: *const u8,
            tag_out: *mut u8,
        ) -> i32 {
            if ctx.is_null() || nonce.is_null() || tag_out.is_null() {
                return -1;
            }
            if msg_len > 0 && msg.is_null() {
                return -1;
            }

            let ctx = unsafe { &*ctx };
            let msg_slice: &[u8] = if msg_len == 0 {
                &[]
            } else {
                unsafe { slice::from_raw_parts(msg, msg_len) }
            };
            let mut nonce_arr = [0u8; NONCE_SIZE];
            nonce_arr.copy_from_slice(unsafe { slice::from_raw_parts(nonce, NONCE_SIZE) });

            let tag = $module::mac(ctx, msg_slice, &nonce_arr);
            unsafe { slice::from_raw_parts_mut(tag_out, TAG_SIZE) }.copy_from_slice(&tag);
            0
        }

        /// Frees a context previously returned by this module's `init`
        /// function. A null pointer is a no-op.
        #[unsafe(no_mangle)]
        pub extern "C" fn $free_fn(ctx: *mut Context<$degree>) {
            if !ctx.is_null() {
                unsafe { drop(Box::from_raw(ctx)) };
            }
        }
    };
}

variant_capi!(1, x1, lemac_x1_init, lemac_x1_mac, lemac_x1_free);
variant_capi!(2, x2, lemac_x2_init, lemac_x2_mac, lemac_x2_free);
variant_capi!(4, x4, lemac_x4_init, lemac_x4_mac, lemac_x4_free);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_through_c_abi() {
        let key = [0u8; 16];
        let mut ctx: *mut Context<1> = core::ptr::null_mut();
        assert_eq!(lemac_x1_init(key.as_ptr(), &mut ctx), 0);
        assert!(!ctx.is_null());

        let nonce = [0u8; 16];
        let mut tag = [0u8; 16];
        let msg = b"hello";
        let rc = lemac_x1_mac(ctx, msg.as_ptr(), msg.len(), nonce.as_ptr(), tag.as_mut_ptr());
        assert_eq!(rc, 0);

        lemac_x1_free(ctx);
    }

    #[test]
    fn null_pointers_are_rejected() {
        let mut ctx: *mut Context<1> = core::ptr::null_mut();
        assert_eq!(lemac_x1_init(core::ptr::null(), &mut ctx), -1);
        assert_eq!(lemac_x1_init([0u8; 16].as_ptr(), core::ptr::null_mut()), -1);
    }
}
