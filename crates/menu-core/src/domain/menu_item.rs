// ============================================================================
// Menu Core - Menu Item Entity
// File: crates/menu-core/src/domain/menu_item.rs
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// A dish on the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Price in euro
    pub price: f64,
    pub category_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    pub is_veg: bool,
    /// Image URL or asset path
    pub image_ref: String,
}

impl MenuItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        category_id: impl Into<String>,
        is_veg: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category_id: category_id.into(),
            subcategory: None,
            is_veg,
            image_ref: String::new(),
        }
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self
    }

    /// Rejects records the engine should never see.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |reason: &str| CatalogError::InvalidRecord {
            id: self.id.clone(),
            reason: reason.to_string(),
        };

        if self.id.trim().is_empty() {
            return Err(invalid("missing id"));
        }
        if self.name.trim().is_empty() {
            return Err(invalid("missing name"));
        }
        if !self.price.is_finite() {
            return Err(invalid("price is not a finite number"));
        }
        if self.price < 0.0 {
            return Err(invalid("price is negative"));
        }
        Ok(())
    }
}
