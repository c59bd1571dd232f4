//! Traits shared across blsprims components

pub mod serialize;

pub use serialize::Serialize;
