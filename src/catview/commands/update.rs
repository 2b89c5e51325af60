use crate::commands::Outcome;
use crate::model::{Product, ProductId};

/// Trims the title and collapses inner whitespace runs (newlines included) to one space.
pub fn normalize_title(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replaces the title of the product with `id`. Position and every other field
/// stay as they were. Empty titles are accepted.
pub fn edit_title(list: &[Product], id: ProductId, new_title: &str) -> (Vec<Product>, Outcome) {
    let title = normalize_title(new_title);
    let mut outcome = Outcome::NotFound;
    let next: Vec<Product> = list
        .iter()
        .map(|p| {
            if p.id == id {
                outcome = Outcome::Applied;
                Product {
                    title: title.clone(),
                    ..p.clone()
                }
            } else {
                p.clone()
            }
        })
        .collect();
    (next, outcome)
}
