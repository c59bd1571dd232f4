//! Data model for the JSON vectors

use blsprims_algorithms::{Fp, G1Affine};
use serde::Deserialize;

use super::error::Result;
use super::loader::parse_biguint;

/// expand_message_xmd cases
#[derive(Debug, Deserialize)]
pub struct XmdVectors {
    pub hash: String,
    pub cases: Vec<XmdCase>,
}

#[derive(Debug, Deserialize)]
pub struct XmdCase {
    pub msg: String,
    pub dst: String,
    pub len_in_bytes: usize,
    pub uniform_bytes: String,
}

impl XmdCase {
    pub fn expected(&self) -> Result<Vec<u8>> {
        Ok(hex::decode(&self.uniform_bytes)?)
    }
}

/// hash_to_field cases with their limb decompositions
#[derive(Debug, Deserialize)]
pub struct HashToFieldVectors {
    pub limb_bits: usize,
    pub limb_count: usize,
    pub cases: Vec<HashToFieldCase>,
}

#[derive(Debug, Deserialize)]
pub struct HashToFieldCase {
    pub msg: String,
    pub dst: String,
    /// `u[i][j]` is coefficient `c_j` of element `i`, `0x` hex
    pub u: [[String; 2]; 2],
    /// Decimal limbs in the same layout as `u`
    pub limbs: [[Vec<String>; 2]; 2],
}

/// Affine coordinates as hex
#[derive(Debug, Clone, Deserialize)]
pub struct PointHex {
    #[serde(default)]
    pub compressed: Option<String>,
    pub x: String,
    pub y: String,
}

impl PointHex {
    /// Build the curve point, rejecting coordinates off the curve
    pub fn to_point(&self) -> Result<G1Affine> {
        let x = Fp::from_biguint_checked(&parse_biguint(&self.x)?)?;
        let y = Fp::from_biguint_checked(&parse_biguint(&self.y)?)?;
        Ok(G1Affine::new(x, y)?)
    }

    /// Raw 48-byte compressed encoding, if present
    pub fn compressed_bytes(&self) -> Result<Option<Vec<u8>>> {
        match &self.compressed {
            Some(h) => Ok(Some(hex::decode(h)?)),
            None => Ok(None),
        }
    }
}

/// Public keys and every subset sum selected by a 4-bit mask
#[derive(Debug, Deserialize)]
pub struct AggregateVectors {
    pub private_keys: Vec<String>,
    pub pubkeys: Vec<PointHex>,
    pub cases: Vec<AggregateCase>,
}

impl AggregateVectors {
    pub fn points(&self) -> Result<Vec<G1Affine>> {
        self.pubkeys.iter().map(PointHex::to_point).collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct AggregateCase {
    /// `bits[i]` selects `pubkeys[i]`
    pub bits: Vec<u8>,
    pub infinity: bool,
    pub x: String,
    pub y: String,
    pub x_limbs: Vec<String>,
    pub y_limbs: Vec<String>,
}

impl AggregateCase {
    pub fn selection(&self) -> Vec<bool> {
        self.bits.iter().map(|b| *b == 1).collect()
    }

    pub fn expected(&self) -> Result<G1Affine> {
        if self.infinity {
            return Ok(G1Affine::identity());
        }
        PointHex {
            compressed: None,
            x: self.x.clone(),
            y: self.y.clone(),
        }
        .to_point()
    }
}
