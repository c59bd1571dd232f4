//! Field arithmetic for BLS12-381

pub mod fp; // Base field
pub mod fp2; // Quadratic extension, values only

pub use fp::Fp;
pub use fp2::Fp2;
