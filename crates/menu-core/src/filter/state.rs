use std::fmt;

use serde::{Deserialize, Serialize};

use super::engine::subcategories_for;
use crate::domain::Catalog;

const ALL: &str = "all";

/// A category or subcategory pick. `"all"` disables the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub fn only(value: impl Into<String>) -> Self {
        Selection::from(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn as_only(&self) -> Option<&str> {
        match self {
            Selection::All => None,
            Selection::Only(value) => Some(value),
        }
    }

    /// `true` when the filter is disabled or `value` equals the selection.
    pub fn admits(&self, value: Option<&str>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => value == Some(wanted.as_str()),
        }
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        if value.is_empty() || value == ALL {
            Selection::All
        } else {
            Selection::Only(value)
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Selection::from(value.to_string())
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::All => ALL.to_string(),
            Selection::Only(value) => value,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(ALL),
            Selection::Only(value) => f.write_str(value),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryFilter {
    #[default]
    All,
    Veg,
    NonVeg,
}

impl DietaryFilter {
    pub fn matches(self, is_veg: bool) -> bool {
        match self {
            DietaryFilter::All => true,
            DietaryFilter::Veg => is_veg,
            DietaryFilter::NonVeg => !is_veg,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Name,
    PriceLow,
    PriceHigh,
}

/// Every filter/sort selection of the menu page.
///
/// Passed in full to [`derive`](super::derive) on every call. The default
/// value shows the whole catalog sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    #[serde(rename = "search")]
    pub search_term: String,
    pub category: Selection,
    pub subcategory: Selection,
    pub dietary: DietaryFilter,
    pub sort: SortKey,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<Selection>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<Selection>) -> Self {
        self.subcategory = subcategory.into();
        self
    }

    pub fn with_dietary(mut self, dietary: DietaryFilter) -> Self {
        self.dietary = dietary;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Switches category. The subcategory goes back to `all` whenever the
    /// category changes or the new category does not offer it.
    pub fn select_category(&mut self, category: impl Into<Selection>, catalog: &Catalog) {
        let category = category.into();
        if category != self.category {
            self.subcategory = Selection::All;
        }
        self.category = category;
        self.reset_unoffered_subcategory(catalog);
    }

    /// Copy with an impossible subcategory pick reset to `all`.
    pub fn normalized(&self, catalog: &Catalog) -> Self {
        let mut state = self.clone();
        state.reset_unoffered_subcategory(catalog);
        state
    }

    fn reset_unoffered_subcategory(&mut self, catalog: &Catalog) {
        if let Selection::Only(sub) = &self.subcategory {
            let offered = subcategories_for(&self.category, catalog);
            if !offered.iter().any(|s| s == sub) {
                self.subcategory = Selection::All;
            }
        }
    }
}
