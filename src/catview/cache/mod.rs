//! # Snapshot Cache
//!
//! A best-effort key-value store holding the last successfully fetched product
//! list. The [`SnapshotCache`] trait lets the service run against disk in
//! production and against memory in tests.
//!
//! - [`fs::FileCache`]: one `<key>.json` file per key under the cache directory
//! - [`memory::MemoryCache`]: no persistence
//!
//! Only one key is used, [`PRODUCTS_KEY`]. Writing a snapshot replaces
//! whatever was stored before.

use crate::error::Result;
use crate::model::Product;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

pub const PRODUCTS_KEY: &str = "products";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub saved_at: DateTime<Utc>,
    pub products: Vec<Product>,
}

impl Snapshot {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            saved_at: Utc::now(),
            products,
        }
    }

    pub fn age(&self) -> Duration {
        Utc::now().signed_duration_since(self.saved_at)
    }

    pub fn is_older_than(&self, ttl: std::time::Duration) -> bool {
        match Duration::from_std(ttl) {
            Ok(ttl) => self.age() > ttl,
            Err(_) => false,
        }
    }
}

pub trait SnapshotCache {
    /// Read the snapshot under `key`, `None` when nothing was stored
    fn get(&self, key: &str) -> Result<Option<Snapshot>>;

    /// Store `snapshot` under `key`, overwriting any previous one
    fn set(&mut self, key: &str, snapshot: &Snapshot) -> Result<()>;
}
