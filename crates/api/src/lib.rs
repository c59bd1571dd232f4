//! Public API traits and types for the blsprims library
//!
//! This crate provides the public error surface shared by every blsprims
//! component together with the serialization trait implemented by curve
//! points.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, ErrorKind, Result, ResultExt};

pub use traits::Serialize;
