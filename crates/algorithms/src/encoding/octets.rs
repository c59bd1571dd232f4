//! I2OSP / OS2IP (RFC 8017 §4)
//!
//! Big-endian conversion between non-negative integers and octet strings of
//! a fixed length. Encoding never truncates: a value that needs more than
//! `len` octets is rejected.

use alloc::format;
use alloc::vec;
use alloc::vec::Vec;

use num_bigint::BigUint;
use tracing::debug;

use crate::error::{Error, Result};

fn too_large(len: usize, needed: usize) -> Error {
    debug!(len, needed, "i2osp overflow");
    Error::range("i2osp", format!("integer too large for {} octet(s)", len))
}

/// Encode `value` as exactly `len` big-endian octets
pub fn i2osp(value: &BigUint, len: usize) -> Result<Vec<u8>> {
    let needed = ((value.bits() + 7) / 8) as usize;
    if needed > len {
        return Err(too_large(len, needed));
    }
    let mut out = vec![0u8; len];
    if needed > 0 {
        out[len - needed..].copy_from_slice(&value.to_bytes_be());
    }
    Ok(out)
}

/// Encode a machine integer as exactly `len` big-endian octets
pub fn i2osp_u64(value: u64, len: usize) -> Result<Vec<u8>> {
    let needed = (64 - value.leading_zeros() as usize + 7) / 8;
    if needed > len {
        return Err(too_large(len, needed));
    }
    let mut out = vec![0u8; len];
    out[len - needed..].copy_from_slice(&value.to_be_bytes()[8 - needed..]);
    Ok(out)
}

/// Fixed-size I2OSP used for the one- and two-octet fields of the expander
pub fn i2osp_array<const L: usize>(value: u64) -> Result<[u8; L]> {
    let needed = (64 - value.leading_zeros() as usize + 7) / 8;
    if needed > L {
        return Err(too_large(L, needed));
    }
    let mut out = [0u8; L];
    out[L - needed..].copy_from_slice(&value.to_be_bytes()[8 - needed..]);
    Ok(out)
}

/// Interpret `bytes` as a big-endian integer; total over all inputs
pub fn os2ip(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}
