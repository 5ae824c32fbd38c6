//! Key-value persistence backends for the leaderboard.

pub mod file;
pub mod sqlite;

use anyhow::Result;
use std::collections::HashMap;

pub use file::FileStore;
pub use sqlite::SqliteStore;

/// Minimal string key-value capability the score board persists through.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// In-memory store, used by tests and as a throwaway backend.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Memory store whose reads and writes can be switched to fail, for
/// exercising error paths after the store has been handed to a board.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub(crate) struct FlakyStore {
    inner: MemoryStore,
    pub fail_reads: std::rc::Rc<std::cell::Cell<bool>>,
    pub fail_writes: std::rc::Rc<std::cell::Cell<bool>>,
}

#[cfg(test)]
impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads.get() {
            anyhow::bail!("database is locked");
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.get() {
            anyhow::bail!("permission denied");
        }
        self.inner.set(key, value)
    }
}
