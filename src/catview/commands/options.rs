use crate::error::{CatviewError, Result};
use crate::model::{FilterField, Product};
use std::collections::BTreeSet;

/// Distinct values of a textual field across `list`, in ascending order.
///
/// Callers pass the canonical list so the choices never shrink while other
/// filters narrow the displayed rows.
pub fn distinct_sorted_values(list: &[Product], field: FilterField) -> Result<Vec<String>> {
    if !field.is_textual() {
        return Err(CatviewError::Api(format!(
            "No option list for numeric field '{}'",
            field
        )));
    }
    let values: BTreeSet<&str> = list
        .iter()
        .map(|p| match field {
            FilterField::Brand => p.brand.as_str(),
            _ => p.category.as_str(),
        })
        .collect();
    Ok(values.into_iter().map(str::to_string).collect())
}
