//! Loads the JSON vectors from disk

use std::fs;
use std::path::{Path, PathBuf};

use num_bigint::BigUint;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;

use super::error::{Result, VectorError};
use super::model::{AggregateVectors, HashToFieldVectors, XmdVectors};

static XMD: OnceCell<XmdVectors> = OnceCell::new();
static HASH_TO_FIELD: OnceCell<HashToFieldVectors> = OnceCell::new();
static AGGREGATE: OnceCell<AggregateVectors> = OnceCell::new();

fn json_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
        .join("json")
}

fn load<T: DeserializeOwned>(file: &'static str) -> Result<T> {
    let path = json_dir().join(file);
    let json = fs::read_to_string(&path).map_err(|source| VectorError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| VectorError::Json { file, source })
}

/// expand_message_xmd known answers
pub fn xmd_vectors() -> Result<&'static XmdVectors> {
    XMD.get_or_try_init(|| load("expand_message_xmd.json"))
}

/// hash_to_field known answers for the G2 suite
pub fn hash_to_field_vectors() -> Result<&'static HashToFieldVectors> {
    HASH_TO_FIELD.get_or_try_init(|| load("hash_to_field.json"))
}

/// Public keys and their bitmask aggregates
pub fn aggregate_vectors() -> Result<&'static AggregateVectors> {
    AGGREGATE.get_or_try_init(|| load("g1_aggregate.json"))
}

/// Parse a `0x`-prefixed hex or a plain decimal integer
pub fn parse_biguint(s: &str) -> Result<BigUint> {
    let parsed = match s.strip_prefix("0x") {
        Some(digits) => BigUint::parse_bytes(digits.as_bytes(), 16),
        None => BigUint::parse_bytes(s.as_bytes(), 10),
    };
    parsed.ok_or_else(|| VectorError::Integer(s.to_string()))
}
