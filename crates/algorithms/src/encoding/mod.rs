//! Integer encodings
//!
//! Two leaf codecs shared by the hashing pipeline and the curve layer:
//! fixed-width little-endian limb vectors for circuit witnesses and the
//! big-endian octet strings of RFC 8017 (I2OSP / OS2IP).

pub mod limbs;
pub mod octets;

pub use limbs::{from_limbs, to_limbs, to_limbs_wrapping, LimbConfig, LimbVector, LimbWitness};
pub use octets::{i2osp, i2osp_array, i2osp_u64, os2ip};
