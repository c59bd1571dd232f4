//! Limb layout used to hand field elements to a circuit evaluator

/// Bit width of each limb
pub const BLS12_381_LIMB_BITS: usize = 55;

/// Number of limbs per base field element
pub const BLS12_381_LIMB_COUNT: usize = 7;

/// Widest limb that still fits a `u64`
pub const MAX_LIMB_BITS: usize = 64;

/// Structure containing a limb layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimbParams {
    /// Bits per limb
    pub bits: usize,

    /// Number of limbs
    pub count: usize,
}

/// Layout covering 385 bits, enough for the 381-bit modulus
pub const BLS12_381_LIMBS: LimbParams = LimbParams {
    bits: BLS12_381_LIMB_BITS,
    count: BLS12_381_LIMB_COUNT,
};
