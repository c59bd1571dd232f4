//! Constants for the BLS12-381 pairing-friendly curve

pub mod hash_to_field;
pub mod limbs;

/// Size of a serialized base field element in bytes
pub const BLS12_381_FIELD_SIZE: usize = 48;

/// Size of a compressed G1 point in bytes
pub const BLS12_381_G1_COMPRESSED_SIZE: usize = 48;

/// Size of an uncompressed G1 point in bytes
pub const BLS12_381_G1_UNCOMPRESSED_SIZE: usize = 96;

/// Bit length of the base field modulus
pub const BLS12_381_MODULUS_BITS: usize = 381;

/// Base field modulus p, big-endian
pub const BLS12_381_MODULUS: [u8; 48] = [
    0x1a, 0x01, 0x11, 0xea, 0x39, 0x7f, 0xe6, 0x9a, 0x4b, 0x1b, 0xa7, 0xb6,
    0x43, 0x4b, 0xac, 0xd7, 0x64, 0x77, 0x4b, 0x84, 0xf3, 0x85, 0x12, 0xbf,
    0x67, 0x30, 0xd2, 0xa0, 0xf6, 0xb0, 0xf6, 0x24, 0x1e, 0xab, 0xff, 0xfe,
    0xb1, 0x53, 0xff, 0xff, 0xb9, 0xfe, 0xff, 0xff, 0xff, 0xff, 0xaa, 0xab,
];

/// Constant b of the G1 curve equation y^2 = x^3 + b
pub const BLS12_381_G1_B: u64 = 4;

/// x coordinate of the standard G1 generator, big-endian
pub const BLS12_381_G1_GENERATOR_X: [u8; 48] = [
    0x17, 0xf1, 0xd3, 0xa7, 0x31, 0x97, 0xd7, 0x94, 0x26, 0x95, 0x63, 0x8c,
    0x4f, 0xa9, 0xac, 0x0f, 0xc3, 0x68, 0x8c, 0x4f, 0x97, 0x74, 0xb9, 0x05,
    0xa1, 0x4e, 0x3a, 0x3f, 0x17, 0x1b, 0xac, 0x58, 0x6c, 0x55, 0xe8, 0x3f,
    0xf9, 0x7a, 0x1a, 0xef, 0xfb, 0x3a, 0xf0, 0x0a, 0xdb, 0x22, 0xc6, 0xbb,
];

/// y coordinate of the standard G1 generator, big-endian
pub const BLS12_381_G1_GENERATOR_Y: [u8; 48] = [
    0x08, 0xb3, 0xf4, 0x81, 0xe3, 0xaa, 0xa0, 0xf1, 0xa0, 0x9e, 0x30, 0xed,
    0x74, 0x1d, 0x8a, 0xe4, 0xfc, 0xf5, 0xe0, 0x95, 0xd5, 0xd0, 0x0a, 0xf6,
    0x00, 0xdb, 0x18, 0xcb, 0x2c, 0x04, 0xb3, 0xed, 0xd0, 0x3c, 0xc7, 0x44,
    0xa2, 0x88, 0x8a, 0xe4, 0x0c, 0xaa, 0x23, 0x29, 0x46, 0xc5, 0xe7, 0xe1,
];

/// Flag bit marking a compressed encoding
pub const G1_FLAG_COMPRESSION: u8 = 0x80;

/// Flag bit marking the point at infinity
pub const G1_FLAG_INFINITY: u8 = 0x40;

/// Flag bit carrying the sign of y in a compressed encoding
pub const G1_FLAG_SORT: u8 = 0x20;

/// Mask clearing all three flag bits from the leading byte
pub const G1_FLAG_MASK: u8 = 0x1f;
