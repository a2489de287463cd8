pub mod file;
pub mod remote;
pub mod sanitize;
pub mod static_catalog;

use async_trait::async_trait;

use crate::domain::Catalog;
use crate::error::CatalogError;

pub use file::FileCatalogProvider;
pub use remote::{RemoteCatalogConfig, RemoteCatalogProvider};
pub use sanitize::SanitizeReport;
pub use static_catalog::StaticCatalogProvider;

/// Source of the catalog for one view.
///
/// `load` is a one-shot read. Implementations do not retry.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn load(&self) -> Result<Catalog, CatalogError>;

    /// Short label for logs ("embedded", "file:/srv/menu.json", ...).
    fn describe(&self) -> String;
}
