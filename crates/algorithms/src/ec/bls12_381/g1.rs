//! G₁ affine points for BLS12-381.
//!
//! A point carries an explicit infinity flag. When the flag is set the
//! coordinates are kept as given but play no part in arithmetic, equality
//! or encoding. Subgroup membership is not checked anywhere in this module.

use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Neg, Sub};

use num_bigint::BigUint;
use tracing::trace;

use super::field::fp::Fp;
use crate::encoding::limbs::{to_limbs, LimbConfig, LimbVector};
use crate::encoding::octets::os2ip;
use crate::error::{validate, Error, Result, ResultExt};
use blsprims_params::bls12_381::{
    BLS12_381_FIELD_SIZE, BLS12_381_G1_B, BLS12_381_G1_COMPRESSED_SIZE,
    BLS12_381_G1_GENERATOR_X, BLS12_381_G1_GENERATOR_Y, BLS12_381_G1_UNCOMPRESSED_SIZE,
    G1_FLAG_COMPRESSION, G1_FLAG_INFINITY, G1_FLAG_MASK, G1_FLAG_SORT,
};

/// How two finite points relate, decided once from their coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdditionCase {
    /// Different x: chord rule
    Distinct,
    /// Same point: tangent (doubling) rule
    Equal,
    /// Same x, opposite y: the sum is the identity
    Inverse,
}

impl AdditionCase {
    /// Classify two finite points
    pub fn classify(a: &G1Affine, b: &G1Affine) -> AdditionCase {
        if a.x != b.x {
            AdditionCase::Distinct
        } else if a.y == b.y {
            AdditionCase::Equal
        } else {
            AdditionCase::Inverse
        }
    }
}

/// G₁ affine point representation.
#[derive(Clone)]
pub struct G1Affine {
    pub(crate) x: Fp,
    pub(crate) y: Fp,
    infinity: bool,
}

impl Default for G1Affine {
    fn default() -> G1Affine {
        G1Affine::identity()
    }
}

fn curve_b() -> Fp {
    Fp::from_u64(BLS12_381_G1_B)
}

impl G1Affine {
    /// Point at infinity.
    pub fn identity() -> G1Affine {
        G1Affine {
            x: Fp::zero(),
            y: Fp::one(),
            infinity: true,
        }
    }

    /// Fixed generator.
    pub fn generator() -> G1Affine {
        G1Affine {
            x: Fp::from_biguint(&BigUint::from_bytes_be(&BLS12_381_G1_GENERATOR_X)),
            y: Fp::from_biguint(&BigUint::from_bytes_be(&BLS12_381_G1_GENERATOR_Y)),
            infinity: false,
        }
    }

    /// Finite point, checked against y^2 = x^3 + 4
    pub fn new(x: Fp, y: Fp) -> Result<G1Affine> {
        let p = G1Affine::new_unchecked(x, y);
        validate::domain(p.is_on_curve(), "G1Affine::new", "point is not on the curve")?;
        Ok(p)
    }

    /// Finite point without the curve check
    pub fn new_unchecked(x: Fp, y: Fp) -> G1Affine {
        G1Affine {
            x,
            y,
            infinity: false,
        }
    }

    /// Point from raw parts; with `is_infinity` set the coordinates are inert
    pub fn from_parts(x: Fp, y: Fp, is_infinity: bool) -> G1Affine {
        G1Affine {
            x,
            y,
            infinity: is_infinity,
        }
    }

    /// Check if point at infinity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.infinity
    }

    /// Curve membership check; the identity is on the curve.
    pub fn is_on_curve(&self) -> bool {
        self.infinity || self.y.square() == &(&self.x.square() * &self.x) + &curve_b()
    }

    /// x coordinate as stored
    pub fn x(&self) -> &Fp {
        &self.x
    }

    /// y coordinate as stored
    pub fn y(&self) -> &Fp {
        &self.y
    }

    /// Group negation; the identity stays the identity
    pub fn neg(&self) -> G1Affine {
        G1Affine {
            x: self.x.clone(),
            y: -&self.y,
            infinity: self.infinity,
        }
    }

    /// Tangent rule
    pub fn double(&self) -> G1Affine {
        if self.infinity || self.y.is_zero() {
            return G1Affine::identity();
        }
        let num = &self.x.square() * &Fp::from_u64(3);
        let den = match self.y.double().invert() {
            Some(inv) => inv,
            None => return G1Affine::identity(),
        };
        let lambda = &num * &den;
        let x3 = &lambda.square() - &self.x.double();
        let y3 = &(&lambda * &(&self.x - &x3)) - &self.y;
        G1Affine::new_unchecked(x3, y3)
    }

    /// Group addition
    ///
    /// The infinity flags are consulted first; coordinates are only compared
    /// when both points are finite.
    pub fn add(&self, rhs: &G1Affine) -> G1Affine {
        match (self.infinity, rhs.infinity) {
            (true, true) => G1Affine::identity(),
            (true, false) => rhs.clone(),
            (false, true) => self.clone(),
            (false, false) => match AdditionCase::classify(self, rhs) {
                AdditionCase::Distinct => self.add_distinct(rhs),
                AdditionCase::Equal => self.double(),
                AdditionCase::Inverse => G1Affine::identity(),
            },
        }
    }

    fn add_distinct(&self, rhs: &G1Affine) -> G1Affine {
        let den = match (&rhs.x - &self.x).invert() {
            Some(inv) => inv,
            None => return G1Affine::identity(),
        };
        let lambda = &(&rhs.y - &self.y) * &den;
        let x3 = &(&lambda.square() - &self.x) - &rhs.x;
        let y3 = &(&lambda * &(&self.x - &x3)) - &self.y;
        G1Affine::new_unchecked(x3, y3)
    }

    /// Coordinates in limb form, `[x, y]`
    pub fn to_limbs(&self, config: LimbConfig) -> Result<[LimbVector; 2]> {
        Ok([self.x.to_limbs(config)?, self.y.to_limbs(config)?])
    }

    /// Compress to 48 bytes.
    pub fn to_compressed(&self) -> [u8; BLS12_381_G1_COMPRESSED_SIZE] {
        if self.infinity {
            let mut res = [0u8; BLS12_381_G1_COMPRESSED_SIZE];
            res[0] = G1_FLAG_COMPRESSION | G1_FLAG_INFINITY;
            return res;
        }
        let mut res = self.x.to_bytes();
        res[0] |= G1_FLAG_COMPRESSION;
        if self.y.lexicographically_largest() {
            res[0] |= G1_FLAG_SORT;
        }
        res
    }

    /// Decompress from 48 bytes
    ///
    /// The x coordinate must be canonical and the abscissa of a curve
    /// point; the sort flag selects between the two square roots.
    pub fn from_compressed(bytes: &[u8; BLS12_381_G1_COMPRESSED_SIZE]) -> Result<G1Affine> {
        let flags = bytes[0] & !G1_FLAG_MASK;
        validate::parameter(
            flags & G1_FLAG_COMPRESSION != 0,
            "compressed_bytes",
            "compression flag not set",
        )?;
        let mut tmp = *bytes;
        tmp[0] &= G1_FLAG_MASK;

        if flags & G1_FLAG_INFINITY != 0 {
            validate::parameter(
                flags & G1_FLAG_SORT == 0 && tmp.iter().all(|b| *b == 0),
                "compressed_bytes",
                "non-canonical encoding of the point at infinity",
            )?;
            return Ok(G1Affine::identity());
        }

        let x = Fp::from_bytes(&tmp)?;
        let rhs = &(&x.square() * &x) + &curve_b();
        let y = rhs.sqrt().ok_or_else(|| {
            Error::domain("G1Affine::from_compressed", "x is not the abscissa of a curve point")
        })?;
        let want_largest = flags & G1_FLAG_SORT != 0;
        let y = if y.lexicographically_largest() == want_largest {
            y
        } else {
            -y
        };
        Ok(G1Affine::new_unchecked(x, y))
    }

    /// Serialize to 96 bytes uncompressed.
    pub fn to_uncompressed(&self) -> [u8; BLS12_381_G1_UNCOMPRESSED_SIZE] {
        let mut res = [0u8; BLS12_381_G1_UNCOMPRESSED_SIZE];
        if self.infinity {
            res[0] = G1_FLAG_INFINITY;
            return res;
        }
        res[..BLS12_381_FIELD_SIZE].copy_from_slice(&self.x.to_bytes());
        res[BLS12_381_FIELD_SIZE..].copy_from_slice(&self.y.to_bytes());
        res
    }

    /// Deserialize from 96 uncompressed bytes, checking the curve equation
    pub fn from_uncompressed(bytes: &[u8; BLS12_381_G1_UNCOMPRESSED_SIZE]) -> Result<G1Affine> {
        let flags = bytes[0] & !G1_FLAG_MASK;
        validate::parameter(
            flags & (G1_FLAG_COMPRESSION | G1_FLAG_SORT) == 0,
            "uncompressed_bytes",
            "compression or sort flag set on an uncompressed encoding",
        )?;
        let mut x_bytes = [0u8; BLS12_381_FIELD_SIZE];
        let mut y_bytes = [0u8; BLS12_381_FIELD_SIZE];
        x_bytes.copy_from_slice(&bytes[..BLS12_381_FIELD_SIZE]);
        y_bytes.copy_from_slice(&bytes[BLS12_381_FIELD_SIZE..]);
        x_bytes[0] &= G1_FLAG_MASK;

        if flags & G1_FLAG_INFINITY != 0 {
            validate::parameter(
                x_bytes.iter().chain(y_bytes.iter()).all(|b| *b == 0),
                "uncompressed_bytes",
                "non-canonical encoding of the point at infinity",
            )?;
            return Ok(G1Affine::identity());
        }

        G1Affine::new(Fp::from_bytes(&x_bytes)?, Fp::from_bytes(&y_bytes)?)
    }
}

/// x coordinate of a compressed public key, flag bits stripped
///
/// No decompression is attempted; this mirrors what a circuit does when it
/// takes the 48 key bytes as input.
pub fn pubkey_x_from_compressed(bytes: &[u8]) -> Result<BigUint> {
    validate::length("compressed public key", bytes.len(), BLS12_381_G1_COMPRESSED_SIZE)?;
    let mut tmp: Vec<u8> = bytes.to_vec();
    tmp[0] &= G1_FLAG_MASK;
    Ok(os2ip(&tmp))
}

/// Limb form of [`pubkey_x_from_compressed`]
pub fn pubkey_x_limbs(bytes: &[u8], config: LimbConfig) -> Result<LimbVector> {
    to_limbs(&pubkey_x_from_compressed(bytes)?, config)
}

/// Sum the points whose selection bit is set
///
/// An all-clear mask yields the identity. `points` and `bits` must have the
/// same length.
pub fn aggregate_selected(points: &[G1Affine], bits: &[bool]) -> Result<G1Affine> {
    validate::length("aggregate_selected", bits.len(), points.len())?;
    let selected = bits.iter().filter(|b| **b).count();
    trace!(total = points.len(), selected, "aggregating G1 points");
    Ok(points
        .iter()
        .zip(bits.iter())
        .filter(|(_, bit)| **bit)
        .fold(G1Affine::identity(), |acc, (p, _)| acc.add(p)))
}

/// Sum of all points
pub fn aggregate(points: &[G1Affine]) -> G1Affine {
    points.iter().sum()
}

impl PartialEq for G1Affine {
    fn eq(&self, other: &Self) -> bool {
        match (self.infinity, other.infinity) {
            (true, true) => true,
            (false, false) => self.x == other.x && self.y == other.y,
            _ => false,
        }
    }
}

impl Eq for G1Affine {}

impl fmt::Debug for G1Affine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.infinity {
            write!(f, "G1Affine(infinity)")
        } else {
            f.debug_struct("G1Affine")
                .field("x", &self.x)
                .field("y", &self.y)
                .finish()
        }
    }
}

impl fmt::Display for G1Affine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.infinity {
            write!(f, "infinity")
        } else {
            write!(f, "({}, {})", self.x, self.y)
        }
    }
}

impl blsprims_api::Serialize for G1Affine {
    fn from_bytes(bytes: &[u8]) -> blsprims_api::Result<Self> {
        validate::length("G1Affine::from_bytes", bytes.len(), BLS12_381_G1_COMPRESSED_SIZE)?;
        let mut arr = [0u8; BLS12_381_G1_COMPRESSED_SIZE];
        arr.copy_from_slice(bytes);
        G1Affine::from_compressed(&arr).with_context("G1Affine::from_bytes")
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.to_compressed().to_vec()
    }
}

impl<'a> Neg for &'a G1Affine {
    type Output = G1Affine;

    #[inline]
    fn neg(self) -> G1Affine {
        G1Affine::neg(self)
    }
}

impl Neg for G1Affine {
    type Output = G1Affine;

    #[inline]
    fn neg(self) -> G1Affine {
        G1Affine::neg(&self)
    }
}

impl<'a, 'b> Add<&'b G1Affine> for &'a G1Affine {
    type Output = G1Affine;

    #[inline]
    fn add(self, rhs: &'b G1Affine) -> G1Affine {
        G1Affine::add(self, rhs)
    }
}

impl Add<G1Affine> for G1Affine {
    type Output = G1Affine;

    #[inline]
    fn add(self, rhs: G1Affine) -> G1Affine {
        G1Affine::add(&self, &rhs)
    }
}

impl<'b> Add<&'b G1Affine> for G1Affine {
    type Output = G1Affine;

    #[inline]
    fn add(self, rhs: &'b G1Affine) -> G1Affine {
        G1Affine::add(&self, rhs)
    }
}

impl<'a, 'b> Sub<&'b G1Affine> for &'a G1Affine {
    type Output = G1Affine;

    #[inline]
    fn sub(self, rhs: &'b G1Affine) -> G1Affine {
        G1Affine::add(self, &G1Affine::neg(rhs))
    }
}

impl Sub<G1Affine> for G1Affine {
    type Output = G1Affine;

    #[inline]
    fn sub(self, rhs: G1Affine) -> G1Affine {
        &self - &rhs
    }
}

impl<'b> AddAssign<&'b G1Affine> for G1Affine {
    #[inline]
    fn add_assign(&mut self, rhs: &'b G1Affine) {
        *self = G1Affine::add(self, rhs);
    }
}

impl AddAssign<G1Affine> for G1Affine {
    #[inline]
    fn add_assign(&mut self, rhs: G1Affine) {
        *self = G1Affine::add(self, &rhs);
    }
}

impl<T> Sum<T> for G1Affine
where
    T: Borrow<G1Affine>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::identity(), |acc, item| G1Affine::add(&acc, item.borrow()))
    }
}
