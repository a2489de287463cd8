//! # Menu Core
//!
//! Restaurant menu catalog: data model, the filter/sort engine that derives
//! the displayed dish list, and the providers that load a catalog.
//!
//! The engine is pure. All filter state lives in a [`FilterState`] value
//! owned by the caller and passed in full on every call.

pub mod display;
pub mod domain;
pub mod error;
pub mod filter;
pub mod landing;
pub mod provider;

pub use domain::{Catalog, Category, MenuItem};
pub use error::CatalogError;
pub use filter::{derive, subcategories_for, DietaryFilter, FilterState, Selection, SortKey};
pub use provider::{
    CatalogProvider, FileCatalogProvider, RemoteCatalogProvider, StaticCatalogProvider,
};
