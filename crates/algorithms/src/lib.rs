//! BLS12-381 building blocks for circuit witness generation
//!
//! This crate provides the primitives needed to prepare public inputs for
//! BLS signature circuits:
//!
//! - fixed-width limb encoding of large integers (55-bit limbs by default)
//! - I2OSP / OS2IP octet string conversion
//! - `expand_message_xmd` and `hash_to_field` from RFC 9380
//! - affine G₁ addition with an explicit point-at-infinity flag, and
//!   aggregation of public keys selected by a bitmask
//!
//! The curve and field code is variable-time. It is meant for computing
//! witnesses over public data, not for handling secret keys.
//!
//! The library is usable in `no_std` environments with an allocator.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Hash function implementations
pub mod hash;
pub use hash::{HashAlgorithm, HashFunction, Sha256};

// Limb and octet string codecs
pub mod encoding;
pub use encoding::{
    from_limbs, i2osp, i2osp_array, i2osp_u64, os2ip, to_limbs, to_limbs_wrapping, LimbConfig,
    LimbVector,
};

// RFC 9380 message expansion and hash-to-field
pub mod hash_to_field;
pub use hash_to_field::{
    expand_message_xmd, expand_message_xmd_sha256, hash_to_field, hash_to_field_fp,
    hash_to_field_g2, HashToFieldLimbs, HashToFieldResult, HashToFieldSuite,
};

// Elliptic curve primitives
pub mod ec;
pub use ec::bls12_381::{
    aggregate, aggregate_selected, pubkey_x_from_compressed, pubkey_x_limbs, AdditionCase, Fp,
    Fp2, G1Affine,
};
