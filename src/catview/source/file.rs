use super::{decode_products, ProductSource};
use crate::error::{CatviewError, Result};
use crate::model::Product;
use std::fs;
use std::path::PathBuf;

/// Reads the product envelope from a local JSON file instead of the network.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProductSource for FileSource {
    fn fetch(&self) -> Result<Vec<Product>> {
        let body = fs::read(&self.path).map_err(|e| {
            CatviewError::Network(format!("failed to read {}: {}", self.path.display(), e))
        })?;
        decode_products(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::memory::fixtures::{catalog, envelope};

    #[test]
    fn reads_envelope_from_disk() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("products.json");
        fs::write(&path, envelope(&catalog())).unwrap();

        let products = FileSource::new(&path).fetch().unwrap();
        assert_eq!(products, catalog());
        assert_eq!(FileSource::new(&path).describe(), path.display().to_string());
    }

    #[test]
    fn missing_file_is_a_network_error() {
        let temp = tempfile::tempdir().unwrap();
        let source = FileSource::new(temp.path().join("absent.json"));
        assert!(matches!(source.fetch(), Err(CatviewError::Network(_))));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("products.json");
        fs::write(&path, r#"{"products": "none"}"#).unwrap();
        assert!(matches!(
            FileSource::new(&path).fetch(),
            Err(CatviewError::Parse(_))
        ));
    }
}
