//! Key/value persistence boundary.

use anyhow::Result;
use rustc_hash::FxHashMap;

/// Opaque byte storage keyed by name.
///
/// The engine decides what to store (bincode-encoded records); the
/// implementation decides where.
pub trait Storage {
    /// Store `data` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, data: &[u8]) -> Result<()>;

    /// Fetch the value under `key`, or `None` if nothing was stored.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>>;
}

/// In-process storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: FxHashMap<String, Vec<u8>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw access for inspection and fault injection.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn insert(&mut self, key: impl Into<String>, data: Vec<u8>) {
        self.entries.insert(key.into(), data);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn save(&mut self, key: &str, data: &[u8]) -> Result<()> {
        self.entries.insert(key.to_owned(), data.to_vec());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }
}
