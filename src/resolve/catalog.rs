//! Category and product resolution.
//!
//! Plain functions over borrowed collections; order of the content file is
//! always preserved.

use crate::content::{Category, Product};

/// Default size of the "related products" rail.
pub const RELATED_LIMIT: usize = 4;

/// Default size of the "more products" showcase on a product page.
pub const SHOWCASE_LIMIT: usize = 6;

pub fn find_category_by_id(categories: &[Category], id: u32) -> Option<&Category> {
    categories.iter().find(|c| c.id == id)
}

pub fn find_category_by_slug<'a>(categories: &'a [Category], slug: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.slug == slug)
}

/// Products in `category_id`, in content order.
pub fn products_by_category(products: &[Product], category_id: u32) -> Vec<&Product> {
    products
        .iter()
        .filter(|p| p.category_id == category_id)
        .collect()
}

/// Up to `limit` products sharing `current`'s category, excluding `current`.
pub fn related_products<'a>(products: &'a [Product], current: &Product, limit: usize) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| p.category_id == current.category_id && p.id != current.id)
        .take(limit)
        .collect()
}

/// Neighbors of `items[current]` for the product showcase rail.
///
/// Takes the item right before `current`, then every following item, up to
/// `limit`. When that is not enough, the nearest earlier items fill the
/// remaining slots, placed in front so the result keeps list order.
///
/// ```text
/// [A, B, C, D, E], current = C
///   limit 2 -> [B, D]
///   limit 6 -> [A, B, D, E]
/// ```
pub fn showcase<'a, T: ?Sized>(items: &[&'a T], current: usize, limit: usize) -> Vec<&'a T> {
    if current >= items.len() || limit == 0 {
        return Vec::new();
    }

    let start = current.saturating_sub(1);
    let forward: Vec<&'a T> = items[start..]
        .iter()
        .enumerate()
        .filter(|(offset, _)| start + offset != current)
        .map(|(_, item)| *item)
        .take(limit)
        .collect();

    let missing = limit - forward.len();
    if missing == 0 || start == 0 {
        return forward;
    }

    let from = start.saturating_sub(missing);
    let mut result = items[from..start].to_vec();
    result.extend(forward);
    result
}
