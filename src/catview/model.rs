use crate::error::{CatviewError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

pub type ProductId = u64;

/// A catalog entry as delivered by the product source.
///
/// Only `title` is ever changed after load; everything else is read-only for
/// the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    // Some upstream records carry no brand at all
    #[serde(default)]
    pub brand: String,
    pub category: String,
    pub price: f64,
    pub rating: f64,
}

impl Product {
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        brand: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        rating: f64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            brand: brand.into(),
            category: category.into(),
            price,
            rating,
        }
    }
}

/// Checks the model constraints on a freshly decoded list.
pub fn validate_products(products: &[Product]) -> Result<()> {
    let mut seen = HashSet::with_capacity(products.len());
    for p in products {
        if !p.price.is_finite() || p.price < 0.0 {
            return Err(CatviewError::Parse(format!(
                "product {} has invalid price {}",
                p.id, p.price
            )));
        }
        if !(0.0..=5.0).contains(&p.rating) {
            return Err(CatviewError::Parse(format!(
                "product {} has rating {} outside 0..=5",
                p.id, p.rating
            )));
        }
        if !seen.insert(p.id) {
            return Err(CatviewError::Parse(format!("duplicate product id {}", p.id)));
        }
    }
    Ok(())
}

/// The fields a user can constrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Brand,
    Category,
    Price,
    Rating,
}

impl FilterField {
    pub fn name(&self) -> &'static str {
        match self {
            FilterField::Brand => "brand",
            FilterField::Category => "category",
            FilterField::Price => "price",
            FilterField::Rating => "rating",
        }
    }

    /// Whether the field holds free text matched exactly, as opposed to a numeric bound.
    pub fn is_textual(&self) -> bool {
        matches!(self, FilterField::Brand | FilterField::Category)
    }

    pub fn all() -> &'static [FilterField] {
        &[
            FilterField::Brand,
            FilterField::Category,
            FilterField::Price,
            FilterField::Rating,
        ]
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterField {
    type Err = CatviewError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "brand" => Ok(FilterField::Brand),
            "category" => Ok(FilterField::Category),
            "price" | "max-price" => Ok(FilterField::Price),
            "rating" | "min-rating" => Ok(FilterField::Rating),
            other => Err(CatviewError::Api(format!("Unknown filter field: {}", other))),
        }
    }
}

/// User supplied constraints, exactly as typed.
///
/// An empty string means "no constraint". Numeric fields stay textual here and
/// are parsed when the filter is evaluated. Values are never edited in place:
/// [`FilterCriteria::with`] builds the next criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub brand: String,
    pub category: String,
    pub price: String,
    pub rating: String,
}

impl FilterCriteria {
    pub fn with(&self, field: FilterField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            FilterField::Brand => next.brand = value,
            FilterField::Category => next.category = value,
            FilterField::Price => next.price = value,
            FilterField::Rating => next.rating = value,
        }
        next
    }

    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Brand => &self.brand,
            FilterField::Category => &self.category,
            FilterField::Price => &self.price,
            FilterField::Rating => &self.rating,
        }
    }

    pub fn is_empty(&self) -> bool {
        FilterField::all().iter().all(|f| self.get(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_with_extra_fields_and_missing_brand() {
        let json = r#"{
            "id": 7,
            "title": "Tree Oil",
            "description": "ignored",
            "category": "skincare",
            "price": 12.5,
            "rating": 4.1,
            "stock": 3
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, 7);
        assert_eq!(p.brand, "");
        assert_eq!(p.category, "skincare");
    }

    #[test]
    fn criteria_with_replaces_one_field() {
        let base = FilterCriteria::default().with(FilterField::Brand, "Apple");
        let next = base.with(FilterField::Price, "100");

        assert_eq!(base.price, "");
        assert_eq!(next.brand, "Apple");
        assert_eq!(next.price, "100");
        assert!(!next.is_empty());
        assert!(FilterCriteria::default().is_empty());
    }

    #[test]
    fn parses_field_names() {
        assert_eq!("Brand".parse::<FilterField>().unwrap(), FilterField::Brand);
        assert_eq!("max-price".parse::<FilterField>().unwrap(), FilterField::Price);
        assert!("title".parse::<FilterField>().is_err());
    }

    #[test]
    fn validation_rejects_bad_records() {
        let ok = vec![Product::new(1, "a", "b", "c", 0.0, 5.0)];
        assert!(validate_products(&ok).is_ok());

        let negative = vec![Product::new(1, "a", "b", "c", -1.0, 3.0)];
        assert!(matches!(
            validate_products(&negative),
            Err(CatviewError::Parse(_))
        ));

        let rating = vec![Product::new(1, "a", "b", "c", 1.0, 5.5)];
        assert!(validate_products(&rating).is_err());

        let dup = vec![
            Product::new(1, "a", "b", "c", 1.0, 3.0),
            Product::new(1, "d", "e", "f", 2.0, 3.0),
        ];
        assert!(validate_products(&dup).is_err());
    }
}
