use serde::{Deserialize, Serialize};

use super::{Category, MenuItem};

/// Categories and dishes for one view. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>, items: Vec<MenuItem>) -> Self {
        Self { categories, items }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Display name of a category, `None` for dangling references.
    pub fn category_name(&self, id: &str) -> Option<&str> {
        self.category(id).map(|c| c.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
