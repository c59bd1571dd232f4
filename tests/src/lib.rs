//! Known-answer vectors and shared helpers for the blsprims integration tests
//!
//! Vectors live as JSON under `src/vectors/json` and are parsed once per
//! test binary.

pub mod vectors;

pub use vectors::{
    aggregate_vectors, hash_to_field_vectors, parse_biguint, xmd_vectors, VectorError,
};
