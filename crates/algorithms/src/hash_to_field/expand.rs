//! `expand_message_xmd` (RFC 9380 §5.3.1)

use alloc::vec;
use alloc::vec::Vec;

use tracing::trace;

use crate::encoding::octets::i2osp_array;
use crate::error::{validate, Result};
use crate::hash::{HashAlgorithm, HashFunction, Sha256};
use blsprims_internal::xor_into;
use blsprims_params::utils::hash::{MAX_DST_LEN, MAX_XMD_ELL, MAX_XMD_LEN};

/// Expand `msg` into `len_in_bytes` pseudorandom bytes bound to `dst`
///
/// `H` supplies the digest: its block size is the zero prefix `Z_pad` and
/// its output size the chaining width. Fails with a length error when the
/// DST exceeds 255 bytes, the output exceeds 65535 bytes or more than 255
/// digest blocks would be needed.
pub fn expand_message_xmd<H: HashFunction>(
    msg: &[u8],
    dst: &[u8],
    len_in_bytes: usize,
) -> Result<Vec<u8>> {
    let b_in_bytes = H::output_size();
    let r_in_bytes = H::block_size();

    validate::max_length("expand_message_xmd DST", dst.len(), MAX_DST_LEN)?;
    validate::max_length("expand_message_xmd output", len_in_bytes, MAX_XMD_LEN)?;
    let ell = len_in_bytes.div_ceil(b_in_bytes);
    validate::max_length("expand_message_xmd blocks", ell, MAX_XMD_ELL)?;

    trace!(
        len_in_bytes,
        ell,
        dst_len = dst.len(),
        hash = <H::Algorithm as HashAlgorithm>::ALGORITHM_ID,
        "expand_message_xmd"
    );

    // DST_prime = DST || I2OSP(len(DST), 1)
    let dst_len = i2osp_array::<1>(dst.len() as u64)?;
    let l_i_b_str = i2osp_array::<2>(len_in_bytes as u64)?;
    let z_pad = vec![0u8; r_in_bytes];

    // b_0 = H(Z_pad || msg || l_i_b_str || I2OSP(0, 1) || DST_prime)
    let mut hasher = H::new();
    hasher
        .update(&z_pad)?
        .update(msg)?
        .update(&l_i_b_str)?
        .update(&[0u8])?
        .update(dst)?
        .update(&dst_len)?;
    let b_0 = hasher.finalize()?;

    // b_1 = H(b_0 || I2OSP(1, 1) || DST_prime)
    let mut hasher = H::new();
    hasher
        .update(b_0.as_ref())?
        .update(&[1u8])?
        .update(dst)?
        .update(&dst_len)?;
    let mut b_i = hasher.finalize()?;

    let mut uniform_bytes = Vec::with_capacity(ell * b_in_bytes);
    uniform_bytes.extend_from_slice(b_i.as_ref());

    // b_i = H(strxor(b_0, b_(i - 1)) || I2OSP(i, 1) || DST_prime)
    for i in 2..=ell {
        let mut chained = b_0.clone();
        xor_into(chained.as_mut(), b_i.as_ref());
        let mut hasher = H::new();
        hasher
            .update(chained.as_ref())?
            .update(&i2osp_array::<1>(i as u64)?)?
            .update(dst)?
            .update(&dst_len)?;
        b_i = hasher.finalize()?;
        uniform_bytes.extend_from_slice(b_i.as_ref());
    }

    uniform_bytes.truncate(len_in_bytes);
    Ok(uniform_bytes)
}

/// [`expand_message_xmd`] with SHA-256
pub fn expand_message_xmd_sha256(msg: &[u8], dst: &[u8], len_in_bytes: usize) -> Result<Vec<u8>> {
    expand_message_xmd::<Sha256>(msg, dst, len_in_bytes)
}
