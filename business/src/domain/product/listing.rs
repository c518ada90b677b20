//! Ordering rules shared by every product listing surface.

use std::cmp::Ordering;

use super::model::{Product, ProductWithCategory};

/// Pinned products first, then ascending id.
pub fn listing_order(a: &Product, b: &Product) -> Ordering {
    b.is_pinned
        .cmp(&a.is_pinned)
        .then_with(|| a.id.cmp(&b.id))
}

/// Sorts a listing in place; both the admin panel and the storefront go through here.
pub fn sort_for_listing(entries: &mut [ProductWithCategory]) {
    entries.sort_by(|a, b| listing_order(&a.product, &b.product));
}

/// Products sharing a category with `product`, excluding `product` itself,
/// in ascending id order.
pub fn select_related(product: &Product, candidates: Vec<Product>) -> Vec<Product> {
    let mut related: Vec<Product> = candidates
        .into_iter()
        .filter(|candidate| {
            candidate.category_id == product.category_id && candidate.id != product.id
        })
        .collect();
    related.sort_by(|a, b| a.id.cmp(&b.id));
    related
}
