//! BLS12-381 base field and G₁ affine arithmetic.
//!
//! **Warning:** Variable-time implementation, not for secret inputs.

// Module declarations
pub mod field;
mod g1;

#[cfg(test)]
mod tests;

// Public API exports
pub use field::{Fp, Fp2};
pub use g1::{
    aggregate, aggregate_selected, pubkey_x_from_compressed, pubkey_x_limbs, AdditionCase,
    G1Affine,
};
