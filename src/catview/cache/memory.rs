use super::{Snapshot, SnapshotCache};
use crate::error::{CatviewError, Result};
use std::collections::HashMap;

/// In-memory cache for testing. Does NOT persist data.
#[derive(Default)]
pub struct MemoryCache {
    entries: HashMap<String, Snapshot>,
    fail_writes: bool,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache whose writes always fail, for exercising the best-effort path.
    pub fn failing() -> Self {
        Self {
            entries: HashMap::new(),
            fail_writes: true,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SnapshotCache for MemoryCache {
    fn get(&self, key: &str) -> Result<Option<Snapshot>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, snapshot: &Snapshot) -> Result<()> {
        if self.fail_writes {
            return Err(CatviewError::Io(std::io::Error::other("cache is read-only")));
        }
        self.entries.insert(key.to_string(), snapshot.clone());
        Ok(())
    }
}
