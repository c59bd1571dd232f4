//! Hash-to-field (RFC 9380 §5.2)
//!
//! Messages are expanded with `expand_message_xmd`, cut into `L`-byte
//! chunks, and each chunk is reduced modulo p. For the BLS12-381 G2 suite
//! every element lives in Fp2, so two consecutive reduced chunks form one
//! element.

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::ec::bls12_381::{Fp, Fp2};
use crate::encoding::limbs::{LimbConfig, LimbVector};
use crate::encoding::octets::os2ip;
use crate::error::{validate, Error, Result};
use crate::hash::{HashFunction, Sha256};
use blsprims_params::bls12_381::hash_to_field::{BLS12_381_G2, DST_G2_NUL};

mod expand;

// Fp2 elements are built from consecutive coefficient pairs
const _: () = assert!(BLS12_381_G2.extension_degree == 2);

pub use expand::{expand_message_xmd, expand_message_xmd_sha256};

/// Two Fp2 elements, the output of the BLS12-381 G2 suite
pub type HashToFieldResult = [Fp2; 2];

/// Parameters of a hash-to-field call over Fp2
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashToFieldSuite<'a> {
    /// Domain separation tag, at most 255 bytes
    pub dst: &'a [u8],
    /// Number of Fp2 elements to produce
    pub count: usize,
    /// Bytes drawn per base field coefficient (`L`)
    pub len_per_elem: usize,
}

impl<'a> HashToFieldSuite<'a> {
    /// BLS12381G2_XMD:SHA-256_SSWU_RO_ parameters with the given DST
    pub fn bls12_381_g2(dst: &'a [u8]) -> Self {
        HashToFieldSuite {
            dst,
            count: BLS12_381_G2.count,
            len_per_elem: BLS12_381_G2.len_per_elem,
        }
    }
}

impl Default for HashToFieldSuite<'static> {
    fn default() -> Self {
        HashToFieldSuite::bls12_381_g2(DST_G2_NUL)
    }
}

/// Expand and reduce `count * m` base field coefficients
fn hash_to_coefficients<H: HashFunction>(
    msg: &[u8],
    dst: &[u8],
    coefficients: usize,
    len_per_elem: usize,
) -> Result<Vec<Fp>> {
    validate::parameter(coefficients >= 1, "count", "at least one element is required")?;
    validate::parameter(len_per_elem >= 1, "len_per_elem", "chunk length must be positive")?;
    let len_in_bytes = coefficients
        .checked_mul(len_per_elem)
        .unwrap_or(usize::MAX);
    let uniform_bytes = expand_message_xmd::<H>(msg, dst, len_in_bytes)?;

    Ok(uniform_bytes
        .chunks_exact(len_per_elem)
        .map(|tv| Fp::from_biguint(&os2ip(tv)))
        .collect())
}

/// Hash `msg` to `suite.count` elements of Fp2
pub fn hash_to_field<H: HashFunction>(
    msg: &[u8],
    suite: &HashToFieldSuite<'_>,
) -> Result<Vec<Fp2>> {
    trace!(count = suite.count, len_per_elem = suite.len_per_elem, "hash_to_field");
    let coefficients = suite.count.saturating_mul(BLS12_381_G2.extension_degree);
    let mut flat = hash_to_coefficients::<H>(msg, suite.dst, coefficients, suite.len_per_elem)?
        .into_iter();

    let mut out = Vec::with_capacity(suite.count);
    while let (Some(c0), Some(c1)) = (flat.next(), flat.next()) {
        out.push(Fp2::new(c0, c1));
    }
    Ok(out)
}

/// Hash `msg` to `count` elements of Fp (extension degree 1, SHA-256)
pub fn hash_to_field_fp(msg: &[u8], dst: &[u8], count: usize) -> Result<Vec<Fp>> {
    trace!(count, len_per_elem = BLS12_381_G2.len_per_elem, "hash_to_field_fp");
    hash_to_coefficients::<Sha256>(msg, dst, count, BLS12_381_G2.len_per_elem)
}

/// The two Fp2 elements of the BLS12-381 G2 suite, SHA-256 expander
pub fn hash_to_field_g2(msg: &[u8], dst: &[u8]) -> Result<HashToFieldResult> {
    let suite = HashToFieldSuite::bls12_381_g2(dst);
    let elems = hash_to_field::<Sha256>(msg, &suite)?;
    <HashToFieldResult>::try_from(elems).map_err(|v| Error::Length {
        context: "hash_to_field_g2",
        expected: BLS12_381_G2.count,
        actual: v.len(),
    })
}

/// Limb and hex views of a [`HashToFieldResult`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HashToFieldLimbs {
    /// `limbs[i][j]` is coefficient `c_j` of element `i`
    pub limbs: [[LimbVector; 2]; 2],
    /// Same layout, `0x` hex without leading zeros
    pub hex: [[String; 2]; 2],
}

impl HashToFieldLimbs {
    /// Export both elements in the given limb layout
    pub fn new(result: &HashToFieldResult, config: LimbConfig) -> Result<Self> {
        Ok(HashToFieldLimbs {
            limbs: [result[0].to_limbs(config)?, result[1].to_limbs(config)?],
            hex: [result[0].to_hex(), result[1].to_hex()],
        })
    }

    /// Limbs as decimal strings, the form a circuit witness expects
    pub fn to_decimal_strings(&self) -> [[Vec<String>; 2]; 2] {
        let row = |r: &[LimbVector; 2]| [r[0].to_decimal_strings(), r[1].to_decimal_strings()];
        [row(&self.limbs[0]), row(&self.limbs[1])]
    }
}
