use crate::error::{CatviewError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_ENDPOINT: &str = "https://dummyjson.com/products";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Configuration for catview, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatviewConfig {
    /// URL of the product collection
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout for the product fetch, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Mirror each successful fetch into the local cache
    #[serde(default = "default_cache_enabled")]
    pub cache_enabled: bool,

    /// Snapshots older than this are treated as missing. `None` keeps them forever.
    #[serde(default)]
    pub cache_ttl_secs: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_cache_enabled() -> bool {
    true
}

impl Default for CatviewConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            cache_enabled: true,
            cache_ttl_secs: None,
        }
    }
}

impl CatviewConfig {
    pub const KEYS: &'static [&'static str] =
        &["endpoint", "timeout-secs", "cache-enabled", "cache-ttl-secs"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: CatviewConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "endpoint" => Some(self.endpoint.clone()),
            "timeout-secs" => Some(self.timeout_secs.to_string()),
            "cache-enabled" => Some(self.cache_enabled.to_string()),
            "cache-ttl-secs" => Some(
                self.cache_ttl_secs
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "none".to_string()),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = || CatviewError::Config(format!("Invalid value for {}: {}", key, value));
        match key {
            "endpoint" => {
                if !(value.starts_with("http://") || value.starts_with("https://")) {
                    return Err(CatviewError::Config(format!(
                        "Endpoint must be an http(s) URL: {}",
                        value
                    )));
                }
                self.endpoint = value.to_string();
            }
            "timeout-secs" => self.timeout_secs = value.parse().map_err(|_| invalid())?,
            "cache-enabled" => self.cache_enabled = value.parse().map_err(|_| invalid())?,
            "cache-ttl-secs" => {
                self.cache_ttl_secs = match value {
                    "none" | "" => None,
                    v => Some(v.parse().map_err(|_| invalid())?),
                }
            }
            other => return Err(CatviewError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CatviewConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, 15);
        assert!(config.cache_enabled);
        assert_eq!(config.cache_ttl_secs, None);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = CatviewConfig::load(temp_dir.path().join("absent")).unwrap();
        assert_eq!(config, CatviewConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("nested");

        let mut config = CatviewConfig::default();
        config.set("timeout-secs", "3").unwrap();
        config.set("cache-ttl-secs", "60").unwrap();
        config.save(&dir).unwrap();

        let loaded = CatviewConfig::load(&dir).unwrap();
        assert_eq!(loaded.timeout_secs, 3);
        assert_eq!(loaded.cache_ttl_secs, Some(60));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"cache_enabled": false}"#,
        )
        .unwrap();

        let loaded = CatviewConfig::load(temp_dir.path()).unwrap();
        assert!(!loaded.cache_enabled);
        assert_eq!(loaded.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = CatviewConfig::default();
        assert!(config.set("timeout-secs", "soon").is_err());
        assert!(config.set("endpoint", "ftp://example.com").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, CatviewConfig::default());
    }

    #[test]
    fn test_get_ttl_none() {
        let config = CatviewConfig::default();
        assert_eq!(config.get("cache-ttl-secs").as_deref(), Some("none"));
        assert_eq!(config.get("missing"), None);
    }
}
