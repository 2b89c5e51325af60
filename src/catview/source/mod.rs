//! # Product Source
//!
//! Where the canonical product list comes from. [`ProductSource`] is the seam:
//!
//! - [`http::HttpSource`]: the remote endpoint (production)
//! - [`file::FileSource`]: the same JSON envelope read from disk, for offline runs
//! - [`memory::StaticSource`]: a fixed list or a fixed failure, for tests
//!
//! [`ProductService`] wraps a source with the snapshot cache: every
//! successful fetch is mirrored under [`PRODUCTS_KEY`], and
//! [`ProductService::read_cached`] reads it back after a delay.

use crate::cache::{Snapshot, SnapshotCache, PRODUCTS_KEY};
use crate::error::{CatviewError, Result};
use crate::model::{validate_products, Product};
use serde::Deserialize;
use std::time::Duration;

pub mod file;
pub mod http;
pub mod memory;

pub trait ProductSource {
    /// Retrieve the full product collection, in source order
    fn fetch(&self) -> Result<Vec<Product>>;

    /// Short human readable origin, used in logs
    fn describe(&self) -> String;
}

impl<T: ProductSource + ?Sized> ProductSource for Box<T> {
    fn fetch(&self) -> Result<Vec<Product>> {
        (**self).fetch()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Response envelope: `{ "products": [...], "total": .., ... }`
#[derive(Debug, Deserialize)]
struct ProductPage {
    products: Vec<Product>,
}

/// Decodes a raw response body into a validated product list.
pub fn decode_products(body: &[u8]) -> Result<Vec<Product>> {
    let page: ProductPage =
        serde_json::from_slice(body).map_err(|e| CatviewError::Parse(e.to_string()))?;
    validate_products(&page.products)?;
    Ok(page.products)
}

pub struct ProductService<S: ProductSource, C: SnapshotCache> {
    source: S,
    cache: C,
    cache_enabled: bool,
    cache_ttl: Option<Duration>,
}

impl<S: ProductSource, C: SnapshotCache> ProductService<S, C> {
    pub fn new(source: S, cache: C) -> Self {
        Self {
            source,
            cache,
            cache_enabled: true,
            cache_ttl: None,
        }
    }

    pub fn with_cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Fetch from the source and mirror the result into the cache.
    ///
    /// A failed cache write is logged and otherwise ignored.
    pub fn fetch(&mut self) -> Result<Vec<Product>> {
        let products = self.source.fetch()?;
        tracing::info!(
            source = %self.source.describe(),
            count = products.len(),
            "fetched products"
        );

        if self.cache_enabled {
            let snapshot = Snapshot::new(products.clone());
            if let Err(e) = self.cache.set(PRODUCTS_KEY, &snapshot) {
                tracing::warn!(error = %e, "could not write product snapshot");
            }
        }
        Ok(products)
    }

    /// The last snapshot with its timestamp, honoring the TTL.
    ///
    /// A snapshot that cannot be decoded, or whose products fail validation,
    /// is logged and reported as a miss.
    pub fn snapshot(&self) -> Result<Snapshot> {
        let miss = || CatviewError::CacheMiss(PRODUCTS_KEY.to_string());
        let snapshot = match self.cache.get(PRODUCTS_KEY) {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => return Err(miss()),
            Err(CatviewError::Serialization(e)) => {
                tracing::warn!(error = %e, "discarding undecodable product snapshot");
                return Err(miss());
            }
            Err(e) => return Err(e),
        };

        if let Err(e) = validate_products(&snapshot.products) {
            tracing::warn!(error = %e, "discarding invalid product snapshot");
            return Err(miss());
        }

        if let Some(ttl) = self.cache_ttl {
            if snapshot.is_older_than(ttl) {
                tracing::debug!(saved_at = %snapshot.saved_at, "snapshot expired");
                return Err(miss());
            }
        }
        Ok(snapshot)
    }

    /// Wait `delay`, then return the most recent snapshot.
    pub fn read_cached_snapshot(&self, delay: Duration) -> Result<Snapshot> {
        if !delay.is_zero() {
            tracing::debug!(delay_ms = delay.as_millis() as u64, "delaying cache read");
            std::thread::sleep(delay);
        }
        self.snapshot()
    }

    /// Wait `delay`, then return the most recent snapshot's products.
    pub fn read_cached(&self, delay: Duration) -> Result<Vec<Product>> {
        Ok(self.read_cached_snapshot(delay)?.products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::source::memory::fixtures::two_products;
    use crate::source::memory::StaticSource;
    use std::time::Instant;

    #[test]
    fn decodes_envelope_and_ignores_extras() {
        let body = r#"{
            "products": [
                {"id": 1, "title": "Phone", "brand": "A", "category": "X",
                 "price": 50, "rating": 4.5, "stock": 3, "tags": ["a"]}
            ],
            "total": 1, "skip": 0, "limit": 30
        }"#;
        let products = decode_products(body.as_bytes()).unwrap();
        assert_eq!(products, vec![Product::new(1, "Phone", "A", "X", 50.0, 4.5)]);
    }

    #[test]
    fn decode_failures_are_parse_errors() {
        assert!(matches!(
            decode_products(b"[1, 2, 3]"),
            Err(CatviewError::Parse(_))
        ));
        assert!(matches!(
            decode_products(br#"{"items": []}"#),
            Err(CatviewError::Parse(_))
        ));
        assert!(matches!(
            decode_products(b"<html>"),
            Err(CatviewError::Parse(_))
        ));
        assert!(matches!(
            decode_products(b"{\"products\": [\xff\xfe]}"),
            Err(CatviewError::Parse(_))
        ));
    }

    #[test]
    fn fetch_writes_snapshot() {
        let mut service = ProductService::new(StaticSource::new(two_products()), MemoryCache::new());
        let products = service.fetch().unwrap();

        let snapshot = service.cache().get(PRODUCTS_KEY).unwrap().unwrap();
        assert_eq!(snapshot.products, products);
    }

    #[test]
    fn fetch_succeeds_when_cache_write_fails() {
        let mut service =
            ProductService::new(StaticSource::new(two_products()), MemoryCache::failing());
        assert_eq!(service.fetch().unwrap().len(), 2);
    }

    #[test]
    fn disabled_cache_is_left_alone() {
        let mut service = ProductService::new(StaticSource::new(two_products()), MemoryCache::new())
            .with_cache_enabled(false);
        service.fetch().unwrap();
        assert!(service.cache().is_empty());
    }

    #[test]
    fn failed_fetch_does_not_touch_cache() {
        let mut service = ProductService::new(
            StaticSource::failing(CatviewError::Network("offline".into())),
            MemoryCache::new(),
        );
        assert!(matches!(service.fetch(), Err(CatviewError::Network(_))));
        assert!(service.cache().is_empty());
    }

    #[test]
    fn read_cached_without_snapshot_misses() {
        let service = ProductService::new(StaticSource::new(two_products()), MemoryCache::new());
        assert!(matches!(
            service.read_cached(Duration::ZERO),
            Err(CatviewError::CacheMiss(_))
        ));
    }

    #[test]
    fn read_cached_waits_then_returns_snapshot() {
        let mut service = ProductService::new(StaticSource::new(two_products()), MemoryCache::new());
        service.fetch().unwrap();

        let start = Instant::now();
        let cached = service.read_cached(Duration::from_millis(20)).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
        assert_eq!(cached, two_products());
    }

    #[test]
    fn invalid_snapshot_is_a_miss() {
        let mut cache = MemoryCache::new();
        let products = vec![
            Product::new(1, "Phone", "A", "X", 50.0, 4.5),
            Product::new(1, "Broken", "B", "X", -5.0, 9.0),
        ];
        cache.set(PRODUCTS_KEY, &Snapshot::new(products)).unwrap();

        let service = ProductService::new(StaticSource::new(Vec::new()), cache);
        assert!(matches!(
            service.read_cached(Duration::ZERO),
            Err(CatviewError::CacheMiss(_))
        ));
    }

    #[test]
    fn undecodable_snapshot_file_is_a_miss() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("products.json"), "{not json").unwrap();

        let service = ProductService::new(
            StaticSource::new(Vec::new()),
            crate::cache::fs::FileCache::new(temp.path()),
        );
        assert!(matches!(
            service.read_cached(Duration::ZERO),
            Err(CatviewError::CacheMiss(_))
        ));
    }

    #[test]
    fn expired_snapshot_is_a_miss() {
        let mut cache = MemoryCache::new();
        let mut snapshot = Snapshot::new(two_products());
        snapshot.saved_at = chrono::Utc::now() - chrono::Duration::minutes(10);
        cache.set(PRODUCTS_KEY, &snapshot).unwrap();

        let service = ProductService::new(StaticSource::new(Vec::new()), cache)
            .with_cache_ttl(Some(Duration::from_secs(60)));
        assert!(matches!(
            service.read_cached(Duration::ZERO),
            Err(CatviewError::CacheMiss(_))
        ));
    }
}
