//! Internal utilities for the blsprims library
//!
//! Not part of the public API; the algorithms crate uses these helpers while
//! chaining digests in the message expander and comparing encodings.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;

pub use constant_time::{ct_eq, ct_eq_choice, xor_into};
