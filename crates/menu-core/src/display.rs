//! Presentation helpers for the menu grid.

use serde::Serialize;

use crate::domain::{Catalog, MenuItem};

pub use crate::error::CATALOG_LOAD_ERROR;

pub const CURRENCY_SYMBOL: &str = "€";

/// `9.5` -> `"€9.50"`
pub fn format_price(price: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, price)
}

/// `"Showing 1 dish"`, `"Showing 12 dishes"`
pub fn dish_count_label(count: usize) -> String {
    let noun = if count == 1 { "dish" } else { "dishes" };
    format!("Showing {} {}", count, noun)
}

/// One card in the menu grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DishCard {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub price_label: String,
    pub image: String,
    pub is_veg: bool,
    pub dietary_label: &'static str,
    /// `None` when the item points at a category the catalog does not have
    pub category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
}

impl DishCard {
    pub fn new(item: &MenuItem, catalog: &Catalog) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            price_label: format_price(item.price),
            image: item.image_ref.clone(),
            is_veg: item.is_veg,
            dietary_label: if item.is_veg { "veg" } else { "non-veg" },
            category_name: catalog.category_name(&item.category_id).map(str::to_string),
            subcategory: item.subcategory.clone(),
        }
    }
}

/// Shown instead of the grid when nothing matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            title: "No dishes found",
            hint: "Try adjusting your search or filters",
        }
    }
}
