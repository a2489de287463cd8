//! Catalog filter/sort engine
//!
//! - [`state`]: the serializable filter selections
//! - [`engine`]: `derive` and `subcategories_for`
//! - [`collate`]: locale-aware name ordering

pub mod collate;
pub mod engine;
pub mod state;

pub use engine::{derive, subcategories_for};
pub use state::{DietaryFilter, FilterState, Selection, SortKey};
