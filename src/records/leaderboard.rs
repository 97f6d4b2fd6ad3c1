//! Top scores.

use std::cmp::Ordering;

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::storage::Storage;

/// One finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub points: i32,
    pub timestamp: String,
}

impl ScoreRecord {
    pub fn new(points: i32, timestamp: impl Into<String>) -> Self {
        Self {
            points,
            timestamp: timestamp.into(),
        }
    }
}

impl Ord for ScoreRecord {
    /// By points, then by timestamp.
    fn cmp(&self, other: &Self) -> Ordering {
        self.points
            .cmp(&other.points)
            .then_with(|| self.timestamp.cmp(&other.timestamp))
    }
}

impl PartialOrd for ScoreRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Serialize, Deserialize)]
struct LeaderboardData {
    items: Vec<ScoreRecord>,
}

/// The best scores, highest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Leaderboard {
    items: Vec<ScoreRecord>,
}

impl Leaderboard {
    /// Maximum number of records kept.
    pub const MAX_RECORDS: usize = 9;

    /// Storage key.
    pub const KEY: &'static str = "Leaderboard";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records, highest first.
    #[must_use]
    pub fn items(&self) -> &[ScoreRecord] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Best record, if any.
    #[must_use]
    pub fn best(&self) -> Option<&ScoreRecord> {
        self.items.first()
    }

    /// Insert a record, keeping the best `MAX_RECORDS` in descending order.
    pub fn add(&mut self, record: ScoreRecord) {
        self.items.push(record);
        self.items.sort_by(|a, b| b.cmp(a));
        self.items.truncate(Self::MAX_RECORDS);
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Write the records to storage.
    pub fn save(&self, storage: &mut dyn Storage) -> Result<()> {
        let data = LeaderboardData {
            items: self.items.clone(),
        };
        let bytes = bincode::serialize(&data).context("Failed to encode leaderboard")?;
        storage
            .save(Self::KEY, &bytes)
            .context("Failed to save leaderboard")?;
        debug!("leaderboard saved ({} records)", self.items.len());
        Ok(())
    }

    /// Replace the records with the stored ones.
    ///
    /// Missing or undecodable data leaves the records unchanged. Returns
    /// whether stored records were applied.
    pub fn load(&mut self, storage: &dyn Storage) -> bool {
        match Self::read(storage) {
            Ok(Some(mut items)) => {
                items.sort_by(|a, b| b.cmp(a));
                items.truncate(Self::MAX_RECORDS);
                self.items = items;
                true
            }
            Ok(None) => false,
            Err(err) => {
                warn!("ignoring stored leaderboard: {:#}", err);
                false
            }
        }
    }

    fn read(storage: &dyn Storage) -> Result<Option<Vec<ScoreRecord>>> {
        let Some(bytes) = storage.load(Self::KEY).context("Failed to load leaderboard")? else {
            return Ok(None);
        };
        let data: LeaderboardData =
            bincode::deserialize(&bytes).context("Failed to decode leaderboard")?;
        Ok(Some(data.items))
    }
}
