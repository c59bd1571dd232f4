//! Constant values for blsprims operations
//!
//! Every number the algorithms crate relies on lives here: the BLS12-381
//! base field and G1 parameters, the limb layout used for witness export,
//! the hash-to-field suite and the SHA-256 sizes driving the expander.

#![no_std]

pub mod bls12_381;
pub mod utils;

pub use bls12_381::hash_to_field::{
    DST_G2_NUL, DST_G2_POP, HASH_TO_FIELD_COUNT, HASH_TO_FIELD_EXTENSION_DEGREE, HASH_TO_FIELD_L,
};
pub use bls12_381::limbs::{BLS12_381_LIMB_BITS, BLS12_381_LIMB_COUNT};
pub use utils::hash::{MAX_DST_LEN, MAX_XMD_ELL, MAX_XMD_LEN, SHA256_BLOCK_SIZE, SHA256_OUTPUT_SIZE};
