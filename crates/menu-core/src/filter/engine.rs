use std::cmp::Ordering;

use super::collate::NameCollator;
use super::state::{FilterState, Selection, SortKey};
use crate::domain::{Catalog, MenuItem};

/// Derives the displayed dish list.
///
/// An item is kept iff the search, category, subcategory and dietary
/// predicates all match. The result is then stably sorted by `filters.sort`.
/// One filter pass, one sort pass; `items` is never touched.
pub fn derive<'a>(items: &'a [MenuItem], filters: &FilterState) -> Vec<&'a MenuItem> {
    let needle = filters.search_term.to_lowercase();

    let mut derived: Vec<&MenuItem> = items
        .iter()
        .filter(|item| matches_all(item, filters, &needle))
        .collect();

    match filters.sort {
        SortKey::Name => {
            let mut collator = NameCollator::new();
            derived.sort_by(|a, b| collator.compare(&a.name, &b.name));
        }
        SortKey::PriceLow => derived.sort_by(|a, b| compare_price(a, b)),
        SortKey::PriceHigh => derived.sort_by(|a, b| compare_price(b, a)),
    }

    derived
}

/// Subcategories offered for `category`. Empty for `all` and for ids the
/// catalog does not know.
pub fn subcategories_for<'a>(category: &Selection, catalog: &'a Catalog) -> &'a [String] {
    category
        .as_only()
        .and_then(|id| catalog.category(id))
        .map(|c| c.subcategories.as_slice())
        .unwrap_or(&[])
}

fn matches_all(item: &MenuItem, filters: &FilterState, needle: &str) -> bool {
    let matches_search = needle.is_empty() || item.name.to_lowercase().contains(needle);
    let matches_category = filters.category.admits(Some(&item.category_id));
    let matches_subcategory = filters.subcategory.admits(item.subcategory.as_deref());
    let matches_dietary = filters.dietary.matches(item.is_veg);

    matches_search && matches_category && matches_subcategory && matches_dietary
}

// Non-finite prices rank lowest.
fn sort_price(item: &MenuItem) -> f64 {
    if item.price.is_finite() {
        item.price
    } else {
        f64::NEG_INFINITY
    }
}

fn compare_price(a: &MenuItem, b: &MenuItem) -> Ordering {
    sort_price(a)
        .partial_cmp(&sort_price(b))
        .unwrap_or(Ordering::Equal)
}
