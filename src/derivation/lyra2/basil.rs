//! Basil assembly and sponge-block padding.
//!
//! The basil is the fixed-order block of scheme parameters absorbed right
//! after the password and salt for domain separation. Its serialization
//! order and the block accounting below are part of the scheme: changing
//! either changes every derived key.

use zeroize::Zeroizing;

use super::params::Lyra2Params;
use super::sponge::BLOCK_LEN_BYTES;

/// Serialized basil size: six u32 values.
pub(crate) const BASIL_BYTES: usize = 6 * 4;

/// Start-of-padding marker, placed immediately after the basil.
const PAD_START: u8 = 0x80;
/// End-of-padding marker, XORed into the last byte of the last block.
const PAD_END: u8 = 0x01;

/// Builds `pad(password ‖ salt ‖ basil)` as whole sponge blocks.
///
/// One spare block is always reserved, even when the input is already
/// block-aligned; the non-minimal rounding is part of the wire layout.
/// The returned buffer stages the password and is zeroized on drop.
pub(crate) fn padded_input(
    password: &[u8],
    salt: &[u8],
    key_len: usize,
    params: &Lyra2Params,
) -> Zeroizing<Vec<u8>> {
    let total = password.len() + salt.len() + BASIL_BYTES;
    let n_blocks = total / BLOCK_LEN_BYTES + 1;
    let mut buf = Zeroizing::new(vec![0u8; n_blocks * BLOCK_LEN_BYTES]);

    let mut offset = 0;
    buf[offset..offset + password.len()].copy_from_slice(password);
    offset += password.len();

    buf[offset..offset + salt.len()].copy_from_slice(salt);
    offset += salt.len();

    // Basil, in declared order: keyLen, pwdLen, saltLen, timeCost, nRows, nCols.
    let basil = [
        key_len as u32,
        password.len() as u32,
        salt.len() as u32,
        params.time_cost,
        params.n_rows,
        params.n_cols,
    ];
    for value in basil {
        buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
        offset += 4;
    }

    // Both markers apply in sequence even when they land on the same byte.
    buf[offset] = PAD_START;
    let last = buf.len() - 1;
    buf[last] ^= PAD_END;

    buf
}
