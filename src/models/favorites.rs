use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::CoinRecord;

/// Favorited coins, as snapshots taken when each was starred.
///
/// Snapshots are never refreshed from later fetches: a favorite keeps the price it had when toggled.
/// Serializes as a plain JSON array of records, in the order they were added.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    snapshots: Vec<CoinRecord>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored snapshots. Later duplicates of an id are dropped.
    pub fn from_snapshots(snapshots: Vec<CoinRecord>) -> Self {
        let mut unique: Vec<CoinRecord> = Vec::with_capacity(snapshots.len());
        for coin in snapshots {
            if !unique.iter().any(|c| c.id == coin.id) {
                unique.push(coin);
            }
        }
        Self { snapshots: unique }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.snapshots.iter().any(|c| c.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&CoinRecord> {
        self.snapshots.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CoinRecord> {
        self.snapshots.iter()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize favorites")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let snapshots: Vec<CoinRecord> =
            serde_json::from_str(json).context("Stored favorites are not a JSON array of coins")?;
        Ok(Self::from_snapshots(snapshots))
    }
}

// Set semantics: same ids with the same snapshots, regardless of insertion order.
impl PartialEq for FavoriteSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .snapshots
                .iter()
                .all(|coin| other.get(&coin.id) == Some(coin))
    }
}
