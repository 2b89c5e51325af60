use super::{Snapshot, SnapshotCache};
use crate::error::{CatviewError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileCache {
    root: PathBuf,
}

impl FileCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(CatviewError::Api(format!("Invalid cache key: {}", key)));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl SnapshotCache for FileCache {
    fn get(&self, key: &str) -> Result<Option<Snapshot>> {
        let path = self.entry_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        let snapshot: Snapshot = serde_json::from_str(&content)?;
        Ok(Some(snapshot))
    }

    fn set(&mut self, key: &str, snapshot: &Snapshot) -> Result<()> {
        let path = self.entry_path(key)?;
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        // Write then rename so a reader never sees a half-written snapshot
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string(snapshot)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}
