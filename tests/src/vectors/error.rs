//! Errors raised while loading or interpreting vectors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VectorError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse {file}: {source}")]
    Json {
        file: &'static str,
        source: serde_json::Error,
    },

    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("invalid integer literal: {0}")]
    Integer(String),

    #[error("vector rejected: {0}")]
    Primitive(#[from] blsprims_algorithms::Error),
}

pub type Result<T> = std::result::Result<T, VectorError>;
