//! Record-level validation between a raw source and the engine.
//!
//! Bad records are skipped and logged, never fatal.

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::{Catalog, Category, MenuItem};
use crate::error::CatalogError;

/// Catalog document as stored on disk or embedded in the binary.
#[derive(Debug, Default, Deserialize)]
pub struct RawCatalog {
    #[serde(default)]
    pub categories: Vec<Value>,
    #[serde(default)]
    pub items: Vec<Value>,
}

/// What got dropped while building a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SanitizeReport {
    pub skipped_categories: usize,
    pub skipped_items: usize,
    pub duplicate_items: usize,
}

impl SanitizeReport {
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

/// Decodes each value on its own; undecodable records are skipped.
pub fn decode_records<T: DeserializeOwned>(
    values: Vec<Value>,
    kind: &str,
    skipped: &mut usize,
) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<T>(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping malformed {} record #{}: {}", kind, index, e);
                *skipped += 1;
                None
            }
        })
        .collect()
}

/// Builds a catalog from already-decoded records.
///
/// Categories need a non-empty id and the first occurrence of an id wins;
/// items must pass [`MenuItem::validate`] and duplicate item ids keep the
/// first occurrence. Items pointing at unknown categories are kept.
pub fn build_catalog(
    categories: Vec<Result<Category, CatalogError>>,
    items: Vec<Result<MenuItem, CatalogError>>,
    report: &mut SanitizeReport,
) -> Catalog {
    let mut category_ids = HashSet::new();
    let categories: Vec<Category> = categories
        .into_iter()
        .filter_map(|category| match category {
            Ok(c) if c.id.trim().is_empty() => {
                warn!("Skipping category without id: {:?}", c.name);
                report.skipped_categories += 1;
                None
            }
            Ok(c) if !category_ids.insert(c.id.clone()) => {
                warn!("Skipping duplicate category id {}", c.id);
                report.skipped_categories += 1;
                None
            }
            Ok(c) => Some(c),
            Err(e) => {
                warn!("Skipping category: {}", e);
                report.skipped_categories += 1;
                None
            }
        })
        .collect();

    let mut item_ids = HashSet::new();
    let mut kept = Vec::with_capacity(items.len());
    for item in items {
        let item = match item.and_then(|i| i.validate().map(|()| i)) {
            Ok(item) => item,
            Err(e) => {
                warn!("Skipping menu item: {}", e);
                report.skipped_items += 1;
                continue;
            }
        };

        if !item_ids.insert(item.id.clone()) {
            warn!("Skipping duplicate menu item id {}", item.id);
            report.duplicate_items += 1;
            continue;
        }

        if !category_ids.contains(&item.category_id) {
            debug!(
                "Menu item {} references unknown category {}",
                item.id, item.category_id
            );
        }

        kept.push(item);
    }

    Catalog::new(categories, kept)
}

/// Parses a catalog document in the local format.
pub fn parse_catalog_document(json: &str) -> Result<(Catalog, SanitizeReport), CatalogError> {
    let raw: RawCatalog = serde_json::from_str(json)?;
    let mut report = SanitizeReport::default();

    let categories =
        decode_records::<Category>(raw.categories, "category", &mut report.skipped_categories);
    let items = decode_records::<MenuItem>(raw.items, "menu item", &mut report.skipped_items);

    let catalog = build_catalog(
        categories.into_iter().map(Ok).collect(),
        items.into_iter().map(Ok).collect(),
        &mut report,
    );

    Ok((catalog, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_bad_records() {
        let json = r#"{
            "categories": [
                {"id": "starters", "name": "Starters", "subcategories": ["Veg"]},
                {"name": "No Id"},
                {"id": "", "name": "Blank"}
            ],
            "items": [
                {"id": "1", "name": "Papad", "price": 9.5, "category_id": "starters",
                 "is_veg": true, "image_ref": "/menu/Papad.jpg"},
                {"id": "2", "name": "No Price", "category_id": "starters",
                 "is_veg": true, "image_ref": ""},
                {"id": "3", "name": "Negative", "price": -2.0, "category_id": "starters",
                 "is_veg": true, "image_ref": ""},
                {"id": "1", "name": "Papad Again", "price": 3.0, "category_id": "starters",
                 "is_veg": true, "image_ref": ""}
            ]
        }"#;

        let (catalog, report) = parse_catalog_document(json).unwrap();

        assert_eq!(catalog.categories.len(), 1);
        assert_eq!(catalog.items.len(), 1);
        assert_eq!(catalog.items[0].name, "Papad");
        assert_eq!(report.skipped_categories, 2);
        assert_eq!(report.skipped_items, 2);
        assert_eq!(report.duplicate_items, 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_unknown_category_is_kept() {
        let json = r#"{"items": [
            {"id": "1", "name": "Kulfi", "price": 5.0, "category_id": "desserts",
             "is_veg": true, "image_ref": ""}
        ]}"#;

        let (catalog, report) = parse_catalog_document(json).unwrap();
        assert_eq!(catalog.items.len(), 1);
        assert!(catalog.categories.is_empty());
        assert!(report.is_clean());
    }

    #[test]
    fn test_not_a_document_is_an_error() {
        let result = parse_catalog_document("[1, 2, 3]");
        assert!(matches!(result, Err(CatalogError::Decode(_))));
    }
}
