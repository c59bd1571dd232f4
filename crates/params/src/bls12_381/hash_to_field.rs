//! Constants for the BLS12-381 G2 hash-to-field suite

/// Bytes drawn from the expander per base field coefficient
///
/// ceil((ceil(log2(p)) + k) / 8) with p the 381-bit modulus and k = 128.
pub const HASH_TO_FIELD_L: usize = 64;

/// Number of Fp2 elements produced per message
pub const HASH_TO_FIELD_COUNT: usize = 2;

/// Extension degree m of the target field
pub const HASH_TO_FIELD_EXTENSION_DEGREE: usize = 2;

/// Domain separation tag of the basic (NUL) signature scheme
pub const DST_G2_NUL: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_NUL_";

/// Domain separation tag of the proof-of-possession (POP) signature scheme
pub const DST_G2_POP: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

/// Structure containing hash-to-field suite parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashToFieldParams {
    /// Number of field elements to produce
    pub count: usize,

    /// Extension degree of each element
    pub extension_degree: usize,

    /// Bytes per base field coefficient
    pub len_per_elem: usize,
}

/// Parameters of BLS12381G2_XMD:SHA-256_SSWU_RO_
pub const BLS12_381_G2: HashToFieldParams = HashToFieldParams {
    count: HASH_TO_FIELD_COUNT,
    extension_degree: HASH_TO_FIELD_EXTENSION_DEGREE,
    len_per_elem: HASH_TO_FIELD_L,
};
