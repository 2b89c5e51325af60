//! Filter predicates over the canonical product list.
//!
//! Every call evaluates the full list; nothing here refines a previous result.
//! That keeps relaxation correct: clearing a criterion brings hidden rows back.
//!
//! Numeric criteria arrive as text. They are parsed into a [`NumericBound`]
//! at this boundary. Text that is not a finite number fails the constraint,
//! so [`matches`] rejects every product and [`filter`] yields an empty view.
//! [`try_filter`] reports the same situation as an error for callers that
//! want to tell the user why.

use crate::error::{CatviewError, Result};
use crate::model::{FilterCriteria, FilterField, Product};

/// A parsed numeric criterion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericBound {
    Unbounded,
    Value(f64),
}

impl NumericBound {
    pub fn parse(field: FilterField, raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(NumericBound::Unbounded);
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(NumericBound::Value(v)),
            _ => Err(CatviewError::UnparseableFilterValue {
                field: field.name().to_string(),
                value: raw.to_string(),
            }),
        }
    }

    pub fn as_option(&self) -> Option<f64> {
        match self {
            NumericBound::Unbounded => None,
            NumericBound::Value(v) => Some(*v),
        }
    }
}

/// Criteria with the numeric fields already parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledCriteria<'a> {
    brand: &'a str,
    category: &'a str,
    max_price: NumericBound,
    min_rating: NumericBound,
}

impl<'a> CompiledCriteria<'a> {
    pub fn compile(criteria: &'a FilterCriteria) -> Result<Self> {
        Ok(Self {
            brand: &criteria.brand,
            category: &criteria.category,
            max_price: NumericBound::parse(FilterField::Price, &criteria.price)?,
            min_rating: NumericBound::parse(FilterField::Rating, &criteria.rating)?,
        })
    }

    pub fn matches(&self, product: &Product) -> bool {
        (self.brand.is_empty() || product.brand == self.brand)
            && (self.category.is_empty() || product.category == self.category)
            && self.max_price.as_option().map_or(true, |max| product.price <= max)
            && self.min_rating.as_option().map_or(true, |min| product.rating >= min)
    }
}

pub fn matches(product: &Product, criteria: &FilterCriteria) -> bool {
    match CompiledCriteria::compile(criteria) {
        Ok(compiled) => compiled.matches(product),
        Err(_) => false,
    }
}

/// Like [`filter`], but surfaces an unparseable numeric criterion as an error.
pub fn try_filter(list: &[Product], criteria: &FilterCriteria) -> Result<Vec<Product>> {
    let compiled = CompiledCriteria::compile(criteria)?;
    Ok(list
        .iter()
        .filter(|p| compiled.matches(p))
        .cloned()
        .collect())
}

pub fn filter(list: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    try_filter(list, criteria).unwrap_or_default()
}
