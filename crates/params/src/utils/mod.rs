//! Constants shared by the hashing layer

pub mod hash;
