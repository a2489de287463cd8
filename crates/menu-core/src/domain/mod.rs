//! Catalog domain types

pub mod catalog;
pub mod category;
pub mod menu_item;

pub use catalog::Catalog;
pub use category::Category;
pub use menu_item::MenuItem;
