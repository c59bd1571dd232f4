//! Hash function strategies
//!
//! The message expander is written against [`HashFunction`] so a suite can
//! swap the underlying digest without duplicating the XMD construction.
//! SHA-256 is the only built-in strategy.

use crate::error::Result;
use alloc::string::String;

pub mod sha2;

pub use self::sha2::{Sha256, Sha256Algorithm};

/// Static description of a hash algorithm
pub trait HashAlgorithm {
    /// Digest size in bytes
    const OUTPUT_SIZE: usize;

    /// Internal block size in bytes
    const BLOCK_SIZE: usize;

    /// Human-readable identifier
    const ALGORITHM_ID: &'static str;
}

/// Incremental hash function
pub trait HashFunction: Sized {
    /// Algorithm marker carrying the sizes
    type Algorithm: HashAlgorithm;

    /// Fixed-size digest type
    type Output: AsRef<[u8]> + AsMut<[u8]> + Clone;

    /// Creates a new instance of the hash function
    fn new() -> Self;

    /// Updates the hash function state with new data
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Finalizes the hash computation and returns the digest
    ///
    /// The state is reset afterwards.
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Returns the output size of the hash function in bytes
    fn output_size() -> usize {
        <Self::Algorithm as HashAlgorithm>::OUTPUT_SIZE
    }

    /// Returns the block size of the hash function in bytes
    fn block_size() -> usize {
        <Self::Algorithm as HashAlgorithm>::BLOCK_SIZE
    }

    /// Returns the name of the hash function
    fn name() -> String {
        String::from(<Self::Algorithm as HashAlgorithm>::ALGORITHM_ID)
    }

    /// Convenience method to hash data in a single call
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }
}
