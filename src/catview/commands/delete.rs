use crate::commands::Outcome;
use crate::model::{Product, ProductId};

/// Removes the product with `id`, keeping the order of the rest.
pub fn delete_by_id(list: &[Product], id: ProductId) -> (Vec<Product>, Outcome) {
    let next: Vec<Product> = list.iter().filter(|p| p.id != id).cloned().collect();
    let outcome = if next.len() == list.len() {
        Outcome::NotFound
    } else {
        Outcome::Applied
    };
    (next, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::memory::fixtures::{catalog, two_products};

    #[test]
    fn removes_single_product() {
        let list = two_products();
        let (next, outcome) = delete_by_id(&list, 1);

        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(next.len(), 1);
        assert_eq!(next[0], list[1]);
    }

    #[test]
    fn missing_id_is_a_no_op() {
        let list = two_products();
        let (next, outcome) = delete_by_id(&list, 99);

        assert_eq!(outcome, Outcome::NotFound);
        assert_eq!(next, list);
    }

    #[test]
    fn repeat_delete_is_idempotent() {
        let list = catalog();
        let (once, _) = delete_by_id(&list, 3);
        let (twice, outcome) = delete_by_id(&once, 3);

        assert_eq!(once.len(), list.len() - 1);
        assert_eq!(twice, once);
        assert_eq!(outcome, Outcome::NotFound);
    }

    #[test]
    fn preserves_order_of_remaining() {
        let list = catalog();
        let (next, _) = delete_by_id(&list, 2);
        let expected: Vec<_> = list.iter().filter(|p| p.id != 2).map(|p| p.id).collect();
        let got: Vec<_> = next.iter().map(|p| p.id).collect();
        assert_eq!(got, expected);
    }
}
