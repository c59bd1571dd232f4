//! Quadratic extension Fp2 = Fp[u] / (u^2 + 1)
//!
//! Only what hash-to-field needs: construction, equality and export.

use alloc::string::String;
use core::fmt;

use super::fp::Fp;
use crate::encoding::limbs::{LimbConfig, LimbVector};
use crate::error::Result;

/// Element `c0 + c1 * u` of Fp2
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Fp2 {
    /// Real coefficient
    pub c0: Fp,
    /// Coefficient of u
    pub c1: Fp,
}

impl Fp2 {
    /// Build from the two coefficients
    pub fn new(c0: Fp, c1: Fp) -> Fp2 {
        Fp2 { c0, c1 }
    }

    /// Additive identity
    pub fn zero() -> Fp2 {
        Fp2 {
            c0: Fp::zero(),
            c1: Fp::zero(),
        }
    }

    /// Both coefficients in limb form, `[c0, c1]`
    pub fn to_limbs(&self, config: LimbConfig) -> Result<[LimbVector; 2]> {
        Ok([self.c0.to_limbs(config)?, self.c1.to_limbs(config)?])
    }

    /// Both coefficients as unpadded `0x` hex, `[c0, c1]`
    pub fn to_hex(&self) -> [String; 2] {
        [self.c0.to_hex(), self.c1.to_hex()]
    }
}

impl fmt::Debug for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + {:?}*u", self.c0, self.c1)
    }
}

impl From<(Fp, Fp)> for Fp2 {
    fn from((c0, c1): (Fp, Fp)) -> Fp2 {
        Fp2 { c0, c1 }
    }
}
