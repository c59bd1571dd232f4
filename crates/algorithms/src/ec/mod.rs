//! Elliptic curve primitives

pub mod bls12_381;

pub use bls12_381::{Fp, Fp2, G1Affine};
