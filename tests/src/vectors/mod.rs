//! JSON test vectors
//!
//! - `expand_message_xmd.json`: RFC 9380 appendix K.1 plus 256-byte
//!   outputs under the proof-of-possession DST
//! - `hash_to_field.json`: Fp2 outputs of the G2 suite with their 55x7 limbs
//! - `g1_aggregate.json`: four public keys and every bitmask selection of them

pub mod error;
pub mod loader;
pub mod model;

pub use error::{Result, VectorError};
pub use loader::{aggregate_vectors, hash_to_field_vectors, parse_biguint, xmd_vectors};
pub use model::*;
