use super::ProductSource;
use crate::error::{CatviewError, Result};
use crate::model::Product;
use std::cell::Cell;

/// In-memory source for testing and development.
///
/// Serves a fixed list, or fails the same way on every call.
pub struct StaticSource {
    products: Vec<Product>,
    failure: Option<CatviewError>,
    calls: Cell<usize>,
}

impl StaticSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            failure: None,
            calls: Cell::new(0),
        }
    }

    pub fn failing(error: CatviewError) -> Self {
        Self {
            products: Vec::new(),
            failure: Some(error),
            calls: Cell::new(0),
        }
    }

    /// Number of times `fetch` has been called.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

// CatviewError wraps io/serde errors and cannot be cloned; rebuild an equivalent one.
fn replay(error: &CatviewError) -> CatviewError {
    match error {
        CatviewError::Network(m) => CatviewError::Network(m.clone()),
        CatviewError::Parse(m) => CatviewError::Parse(m.clone()),
        CatviewError::CacheMiss(k) => CatviewError::CacheMiss(k.clone()),
        other => CatviewError::Api(other.to_string()),
    }
}

impl ProductSource for StaticSource {
    fn fetch(&self) -> Result<Vec<Product>> {
        self.calls.set(self.calls.get() + 1);
        match &self.failure {
            Some(e) => Err(replay(e)),
            None => Ok(self.products.clone()),
        }
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::Product;

    /// Two products in one category, one cheap and well rated, one expensive.
    pub fn two_products() -> Vec<Product> {
        vec![
            Product::new(1, "Phone One", "A", "X", 50.0, 4.5),
            Product::new(2, "Phone Two", "B", "X", 150.0, 3.0),
        ]
    }

    /// A small mixed catalog, including a product without a brand.
    pub fn catalog() -> Vec<Product> {
        vec![
            Product::new(1, "iPhone 9", "Apple", "phones", 549.0, 4.69),
            Product::new(2, "iPhone X", "Apple", "phones", 899.0, 4.44),
            Product::new(3, "Galaxy Book", "Samsung", "laptops", 1499.0, 4.25),
            Product::new(4, "MacBook Pro", "Apple", "laptops", 1749.0, 4.57),
            Product::new(5, "Green Apples", "", "groceries", 1.99, 4.1),
            Product::new(6, "OPPO F19", "OPPO", "phones", 280.0, 4.3),
        ]
    }

    /// The body the remote endpoint would send for `products`.
    pub fn envelope(products: &[Product]) -> String {
        serde_json::json!({
            "products": products,
            "total": products.len(),
            "skip": 0,
            "limit": products.len(),
        })
        .to_string()
    }
}
