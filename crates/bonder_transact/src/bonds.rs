//! Bond positions known to the bonder.
//!
//! Migrating a bond needs the face amount and maturity of the NFT being migrated. Those
//! come from a published dataset rather than from the chain, so callers load a
//! [`BondDataset`] once and hand it to every callback that needs it.

use crate::error::BonderTransactError;
use alloy_primitives::U256;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// A single bond NFT.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BondPosition {
    #[serde(rename = "tokenId")]
    pub token_id: u64,

    /// Face amount of the bond, accepted as a JSON number or a decimal/hex string.
    ///
    /// JSON numbers above `u64::MAX` are read as floats and must be whole; only strings keep
    /// every digit of such amounts.
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: U256,

    /// Unix timestamp at which the bond matures.
    pub maturity_time: u64,
}

/// Read-only lookup of bond positions by token id.
#[derive(Debug, Clone, Default)]
pub struct BondDataset {
    positions: HashMap<u64, BondPosition>,
}

impl BondDataset {
    /// Builds a dataset from positions. Later duplicates of a token id are ignored.
    pub fn new(positions: impl IntoIterator<Item = BondPosition>) -> Self {
        let mut by_token = HashMap::new();
        for position in positions {
            by_token.entry(position.token_id).or_insert(position);
        }
        Self {
            positions: by_token,
        }
    }

    /// Decodes the published JSON list of positions.
    pub fn from_json(json: &str) -> Result<Self, BonderTransactError> {
        let positions: Vec<BondPosition> = serde_json::from_str(json)?;
        Ok(Self::new(positions))
    }

    pub fn get(&self, token_id: u64) -> Option<&BondPosition> {
        self.positions.get(&token_id)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(u64),
    Float(f64),
    Text(String),
}

/// 2^128, the first float past what `u128` holds.
const U128_LIMIT: f64 = 340_282_366_920_938_463_463_374_607_431_768_211_456.0;

fn deserialize_amount<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(value) => Ok(U256::from(value)),
        RawAmount::Float(value) => {
            if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < U128_LIMIT {
                Ok(U256::from(value as u128))
            } else {
                Err(serde::de::Error::custom(format!(
                    "bond amount {value} is not a whole non-negative number"
                )))
            }
        }
        RawAmount::Text(text) => U256::from_str(text.trim()).map_err(serde::de::Error::custom),
    }
}
