//! # blsprims
//!
//! BLS12-381 building blocks for preparing the inputs of BLS signature
//! circuits.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! blsprims = "0.3"
//! ```
//!
//! ```
//! use blsprims::prelude::*;
//!
//! let u = hash_to_field_g2(b"abcdefghij", DST_G2_NUL)?;
//! let limbs = HashToFieldLimbs::new(&u, LimbConfig::BLS12_381)?;
//! assert_eq!(limbs.limbs[0][0].len(), 7);
//!
//! let g = G1Affine::generator();
//! let sum = aggregate_selected(&[g.clone(), -&g], &[true, true])?;
//! assert!(sum.is_identity());
//! # Ok::<(), blsprims::algorithms::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `algorithms` (default): the hashing, encoding and curve layer
//! - `serde`: serialization of limb witnesses and error kinds
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`blsprims-api`]: Public error type and the byte serialization trait
//! - [`blsprims-params`]: Curve, limb and hash-to-field constants
//! - [`blsprims-internal`]: Constant-time byte helpers
//! - [`blsprims-algorithms`]: Limb codec, I2OSP/OS2IP, expand_message_xmd,
//!   hash_to_field and G1 arithmetic

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use blsprims_api as api;
pub use blsprims_internal as internal;
pub use blsprims_params as params;
pub use num_bigint;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use blsprims_algorithms as algorithms;

/// Common imports for blsprims users
pub mod prelude {
    pub use crate::api::{Error, ErrorKind, Result, ResultExt, Serialize};
    pub use crate::params::{DST_G2_NUL, DST_G2_POP};
    pub use num_bigint::BigUint;

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{
        aggregate, aggregate_selected, expand_message_xmd, expand_message_xmd_sha256,
        from_limbs, hash_to_field, hash_to_field_fp, hash_to_field_g2, i2osp, os2ip,
        pubkey_x_from_compressed, pubkey_x_limbs, to_limbs, to_limbs_wrapping, AdditionCase, Fp,
        Fp2, G1Affine, HashFunction, HashToFieldLimbs, HashToFieldSuite, LimbConfig, LimbVector,
        Sha256,
    };
}
