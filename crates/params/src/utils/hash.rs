//! Constants for hash functions and message expansion

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Internal block size of SHA-256 in bytes
pub const SHA256_BLOCK_SIZE: usize = 64;

/// Longest domain separation tag accepted by `expand_message_xmd`
pub const MAX_DST_LEN: usize = 255;

/// Largest number of digest blocks `expand_message_xmd` may chain
pub const MAX_XMD_ELL: usize = 255;

/// Longest output `expand_message_xmd` may produce, in bytes
pub const MAX_XMD_LEN: usize = 65535;
