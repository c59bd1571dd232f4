//! BLS12-381 base field GF(p)
//!
//! Elements are stored fully reduced as arbitrary-precision integers.
//! Arithmetic here is variable-time; it serves witness generation and
//! known-answer checking, not secret-dependent computation.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_bigint::BigUint;
use num_traits::{One, Zero};
use once_cell::race::OnceBox;
use subtle::{Choice, ConstantTimeEq};

use crate::encoding::limbs::{to_limbs, LimbConfig, LimbVector};
use crate::error::{validate, Result};
use blsprims_params::bls12_381::{BLS12_381_FIELD_SIZE, BLS12_381_MODULUS};

/// p together with the exponents derived from it
struct FieldConstants {
    modulus: BigUint,
    // p - 2
    inversion_exp: BigUint,
    // (p + 1) / 4
    sqrt_exp: BigUint,
    // (p - 1) / 2
    half: BigUint,
}

impl FieldConstants {
    fn new() -> Self {
        let modulus = BigUint::from_bytes_be(&BLS12_381_MODULUS);
        FieldConstants {
            inversion_exp: &modulus - BigUint::from(2u8),
            sqrt_exp: (&modulus + BigUint::one()) >> 2,
            half: (&modulus - BigUint::one()) >> 1,
            modulus,
        }
    }
}

static CONSTANTS: OnceBox<FieldConstants> = OnceBox::new();

fn constants() -> &'static FieldConstants {
    CONSTANTS.get_or_init(|| Box::new(FieldConstants::new()))
}

/// The field modulus p as an integer
pub fn modulus() -> &'static BigUint {
    &constants().modulus
}

/// Element of GF(p), always in `[0, p)`
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Fp(BigUint);

impl Fp {
    /// Additive identity
    pub fn zero() -> Fp {
        Fp(BigUint::zero())
    }

    /// Multiplicative identity
    pub fn one() -> Fp {
        Fp(BigUint::one())
    }

    /// Small constant
    pub fn from_u64(v: u64) -> Fp {
        Fp::from_biguint(&BigUint::from(v))
    }

    /// Reduce an arbitrary integer modulo p
    pub fn from_biguint(v: &BigUint) -> Fp {
        Fp(v % modulus())
    }

    /// Accept an integer only if it is already below p
    pub fn from_biguint_checked(v: &BigUint) -> Result<Fp> {
        validate::range(v < modulus(), "Fp", "integer is not below the field modulus")?;
        Ok(Fp(v.clone()))
    }

    /// Decode 48 big-endian bytes, rejecting non-canonical encodings
    pub fn from_bytes(bytes: &[u8; BLS12_381_FIELD_SIZE]) -> Result<Fp> {
        Fp::from_biguint_checked(&BigUint::from_bytes_be(bytes))
    }

    /// Encode as 48 big-endian bytes
    pub fn to_bytes(&self) -> [u8; BLS12_381_FIELD_SIZE] {
        let raw = self.0.to_bytes_be();
        let mut res = [0u8; BLS12_381_FIELD_SIZE];
        // zero encodes as a single byte
        if !self.0.is_zero() {
            res[BLS12_381_FIELD_SIZE - raw.len()..].copy_from_slice(&raw);
        }
        res
    }

    /// Canonical integer representative
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Consume into the canonical integer representative
    pub fn into_biguint(self) -> BigUint {
        self.0
    }

    /// Check for zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Field addition
    pub fn add(&self, rhs: &Fp) -> Fp {
        let p = modulus();
        let sum = &self.0 + &rhs.0;
        if sum >= *p {
            Fp(sum - p)
        } else {
            Fp(sum)
        }
    }

    /// Field subtraction
    pub fn sub(&self, rhs: &Fp) -> Fp {
        if self.0 >= rhs.0 {
            Fp(&self.0 - &rhs.0)
        } else {
            Fp(modulus() - &rhs.0 + &self.0)
        }
    }

    /// Additive inverse
    pub fn neg(&self) -> Fp {
        if self.0.is_zero() {
            Fp::zero()
        } else {
            Fp(modulus() - &self.0)
        }
    }

    /// Field multiplication
    pub fn mul(&self, rhs: &Fp) -> Fp {
        Fp((&self.0 * &rhs.0) % modulus())
    }

    /// Squaring
    pub fn square(&self) -> Fp {
        self.mul(self)
    }

    /// Doubling
    pub fn double(&self) -> Fp {
        self.add(self)
    }

    /// Exponentiation by an integer exponent
    pub fn pow(&self, exp: &BigUint) -> Fp {
        Fp(self.0.modpow(exp, modulus()))
    }

    /// Multiplicative inverse by Fermat's little theorem, `None` for zero
    pub fn invert(&self) -> Option<Fp> {
        if self.is_zero() {
            return None;
        }
        Some(self.pow(&constants().inversion_exp))
    }

    /// Square root if one exists
    ///
    /// p = 3 (mod 4), so a candidate is a^((p+1)/4).
    pub fn sqrt(&self) -> Option<Fp> {
        let root = self.pow(&constants().sqrt_exp);
        if root.square() == *self {
            Some(root)
        } else {
            None
        }
    }

    /// True when the element is greater than (p-1)/2
    pub fn lexicographically_largest(&self) -> bool {
        self.0 > constants().half
    }

    /// Limb form of the canonical representative
    pub fn to_limbs(&self, config: LimbConfig) -> Result<LimbVector> {
        to_limbs(&self.0, config)
    }

    /// `0x`-prefixed lowercase hex without leading zeros
    pub fn to_hex(&self) -> String {
        format!("0x{}", self.0.to_str_radix(16))
    }
}

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tmp = self.to_bytes();
        write!(f, "0x")?;
        for &b in tmp.iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Display for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl ConstantTimeEq for Fp {
    fn ct_eq(&self, other: &Self) -> Choice {
        blsprims_internal::ct_eq_choice(self.to_bytes(), other.to_bytes())
    }
}

impl From<u64> for Fp {
    fn from(v: u64) -> Fp {
        Fp::from_u64(v)
    }
}

// Binary operation trait implementations
impl<'a> Neg for &'a Fp {
    type Output = Fp;

    #[inline]
    fn neg(self) -> Fp {
        Fp::neg(self)
    }
}

impl Neg for Fp {
    type Output = Fp;

    #[inline]
    fn neg(self) -> Fp {
        Fp::neg(&self)
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl<'a, 'b> $trait<&'b Fp> for &'a Fp {
            type Output = Fp;

            #[inline]
            fn $method(self, rhs: &'b Fp) -> Fp {
                Fp::$method(self, rhs)
            }
        }

        impl<'b> $trait<&'b Fp> for Fp {
            type Output = Fp;

            #[inline]
            fn $method(self, rhs: &'b Fp) -> Fp {
                Fp::$method(&self, rhs)
            }
        }

        impl<'a> $trait<Fp> for &'a Fp {
            type Output = Fp;

            #[inline]
            fn $method(self, rhs: Fp) -> Fp {
                Fp::$method(self, &rhs)
            }
        }

        impl $trait<Fp> for Fp {
            type Output = Fp;

            #[inline]
            fn $method(self, rhs: Fp) -> Fp {
                Fp::$method(&self, &rhs)
            }
        }

        impl<'b> $assign_trait<&'b Fp> for Fp {
            #[inline]
            fn $assign_method(&mut self, rhs: &'b Fp) {
                *self = Fp::$method(self, rhs);
            }
        }

        impl $assign_trait<Fp> for Fp {
            #[inline]
            fn $assign_method(&mut self, rhs: Fp) {
                *self = Fp::$method(self, &rhs);
            }
        }
    };
}

impl_binop!(Add, add, AddAssign, add_assign);
impl_binop!(Sub, sub, SubAssign, sub_assign);
impl_binop!(Mul, mul, MulAssign, mul_assign);
