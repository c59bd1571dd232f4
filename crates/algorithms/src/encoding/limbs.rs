//! Fixed-width limb codec
//!
//! A [`LimbVector`] holds exactly `count` limbs of `bits` bits each, least
//! significant limb first, so that `value = sum(limb[i] * 2^(bits * i))`.
//! BLS12-381 field elements use 7 limbs of 55 bits (385 bits of capacity).

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use num_bigint::BigUint;
use num_traits::{One, Zero};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{validate, Error, Result};
use blsprims_params::bls12_381::limbs::{LimbParams, BLS12_381_LIMBS, MAX_LIMB_BITS};

/// Limb layout: bits per limb and number of limbs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LimbConfig {
    /// Bits per limb, in `1..=64`
    pub bits: usize,
    /// Number of limbs, at least 1
    pub count: usize,
}

impl LimbConfig {
    /// The (55, 7) layout used for BLS12-381 base field elements
    pub const BLS12_381: LimbConfig = LimbConfig {
        bits: BLS12_381_LIMBS.bits,
        count: BLS12_381_LIMBS.count,
    };

    /// Create a validated layout
    pub fn new(bits: usize, count: usize) -> Result<Self> {
        let config = LimbConfig { bits, count };
        config.validate()?;
        Ok(config)
    }

    /// Check the layout parameters
    pub fn validate(&self) -> Result<()> {
        check_bits(self.bits)?;
        validate::parameter(self.count >= 1, "count", "at least one limb is required")?;
        validate::parameter(
            self.bits.checked_mul(self.count).is_some(),
            "count",
            "limb layout capacity overflows usize",
        )
    }

    /// Total number of bits representable, `bits * count`, saturating
    pub fn capacity_bits(&self) -> usize {
        self.bits.saturating_mul(self.count)
    }
}

impl Default for LimbConfig {
    fn default() -> Self {
        Self::BLS12_381
    }
}

impl From<LimbParams> for LimbConfig {
    fn from(params: LimbParams) -> Self {
        LimbConfig {
            bits: params.bits,
            count: params.count,
        }
    }
}

fn check_bits(bits: usize) -> Result<()> {
    validate::parameter(
        (1..=MAX_LIMB_BITS).contains(&bits),
        "bits",
        "limb width must be in 1..=64",
    )
}

#[inline]
fn limb_fits(limb: u64, bits: usize) -> bool {
    bits >= 64 || limb >> bits == 0
}

/// Ordered little-endian limbs, each below `2^bits`
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "LimbWitness", into = "LimbWitness")
)]
pub struct LimbVector {
    bits: usize,
    limbs: Vec<u64>,
}

impl LimbVector {
    /// Wrap raw limbs after checking the width and every limb's range
    pub fn new(bits: usize, limbs: Vec<u64>) -> Result<Self> {
        check_bits(bits)?;
        validate::parameter(!limbs.is_empty(), "limbs", "at least one limb is required")?;
        for limb in &limbs {
            validate::range(
                limb_fits(*limb, bits),
                "LimbVector",
                "limb does not fit in the limb width",
            )?;
        }
        Ok(LimbVector { bits, limbs })
    }

    /// Bits per limb
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Number of limbs
    pub fn len(&self) -> usize {
        self.limbs.len()
    }

    /// Always false: a limb vector holds at least one limb
    pub fn is_empty(&self) -> bool {
        self.limbs.is_empty()
    }

    /// The limbs, least significant first
    pub fn limbs(&self) -> &[u64] {
        &self.limbs
    }

    /// Consume into the raw limbs
    pub fn into_limbs(self) -> Vec<u64> {
        self.limbs
    }

    /// Layout of this vector
    pub fn config(&self) -> LimbConfig {
        LimbConfig {
            bits: self.bits,
            count: self.limbs.len(),
        }
    }

    /// Recombine into the integer `sum(limb[i] * 2^(bits * i))`
    pub fn value(&self) -> BigUint {
        recombine(&self.limbs, self.bits)
    }

    /// Limbs as decimal strings, the witness form circuit evaluators consume
    pub fn to_decimal_strings(&self) -> Vec<String> {
        self.limbs.iter().map(|l| l.to_string()).collect()
    }

    /// Parse limbs from decimal strings
    pub fn from_decimal_strings<S: AsRef<str>>(bits: usize, limbs: &[S]) -> Result<Self> {
        let parsed = limbs
            .iter()
            .map(|s| {
                s.as_ref()
                    .parse::<u64>()
                    .map_err(|_| Error::param("limbs", "limb is not a decimal u64"))
            })
            .collect::<Result<Vec<u64>>>()?;
        Self::new(bits, parsed)
    }
}

impl fmt::Debug for LimbVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LimbVector<{}>{:?}", self.bits, self.limbs)
    }
}

impl AsRef<[u64]> for LimbVector {
    fn as_ref(&self) -> &[u64] {
        &self.limbs
    }
}

/// Decimal-string form of a [`LimbVector`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LimbWitness {
    /// Bits per limb
    pub bits: usize,
    /// Limbs as decimal strings, least significant first
    pub limbs: Vec<String>,
}

impl From<LimbVector> for LimbWitness {
    fn from(v: LimbVector) -> Self {
        LimbWitness {
            bits: v.bits,
            limbs: v.to_decimal_strings(),
        }
    }
}

impl TryFrom<LimbWitness> for LimbVector {
    type Error = Error;

    fn try_from(w: LimbWitness) -> Result<Self> {
        LimbVector::from_decimal_strings(w.bits, &w.limbs)
    }
}

fn recombine(limbs: &[u64], bits: usize) -> BigUint {
    limbs
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, limb| (acc << bits) | BigUint::from(*limb))
}

fn split(value: &BigUint, config: LimbConfig) -> LimbVector {
    let mask = (BigUint::one() << config.bits) - BigUint::one();
    let mut rest = value.clone();
    let mut limbs = Vec::with_capacity(config.count);
    for _ in 0..config.count {
        let limb = &rest & &mask;
        // limb < 2^64, so it has at most one u64 digit
        limbs.push(limb.iter_u64_digits().next().unwrap_or(0));
        rest >>= config.bits;
    }
    LimbVector {
        bits: config.bits,
        limbs,
    }
}

/// Split `value` into `config.count` limbs of `config.bits` bits
///
/// Fails with a range error when `value >= 2^(bits * count)`.
pub fn to_limbs(value: &BigUint, config: LimbConfig) -> Result<LimbVector> {
    config.validate()?;
    validate::range(
        value.bits() <= config.capacity_bits() as u64,
        "to_limbs",
        "value does not fit in the limb layout",
    )?;
    Ok(split(value, config))
}

/// Split `value` into limbs, reducing it modulo `2^(bits * count)` first
///
/// High bits beyond the layout's capacity are discarded. Only the layout
/// itself is validated.
pub fn to_limbs_wrapping(value: &BigUint, config: LimbConfig) -> Result<LimbVector> {
    config.validate()?;
    Ok(split(value, config))
}

/// Recombine little-endian limbs of `bits` bits into an integer
///
/// Every limb must lie in `[0, 2^bits)`.
pub fn from_limbs(limbs: &[u64], bits: usize) -> Result<BigUint> {
    check_bits(bits)?;
    for limb in limbs {
        validate::range(
            limb_fits(*limb, bits),
            "from_limbs",
            "limb does not fit in the limb width",
        )?;
    }
    Ok(recombine(limbs, bits))
}
