use async_trait::async_trait;
use tracing::{info, warn};

use super::sanitize::parse_catalog_document;
use super::CatalogProvider;
use crate::domain::Catalog;
use crate::error::CatalogError;

const EMBEDDED_MENU: &str = include_str!("../../data/menu.json");

/// Compiled-in catalog.
pub struct StaticCatalogProvider {
    source: StaticSource,
}

enum StaticSource {
    Embedded,
    Fixed(Catalog),
}

impl StaticCatalogProvider {
    /// The house menu shipped with the binary.
    pub fn embedded() -> Self {
        Self {
            source: StaticSource::Embedded,
        }
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            source: StaticSource::Fixed(catalog),
        }
    }
}

impl Default for StaticCatalogProvider {
    fn default() -> Self {
        Self::embedded()
    }
}

#[async_trait]
impl CatalogProvider for StaticCatalogProvider {
    async fn load(&self) -> Result<Catalog, CatalogError> {
        match &self.source {
            StaticSource::Embedded => {
                let (catalog, report) = parse_catalog_document(EMBEDDED_MENU)?;
                if !report.is_clean() {
                    warn!("Embedded menu contains invalid records: {:?}", report);
                }
                info!(
                    "Loaded embedded menu: {} categories, {} items",
                    catalog.categories.len(),
                    catalog.items.len()
                );
                Ok(catalog)
            }
            StaticSource::Fixed(catalog) => Ok(catalog.clone()),
        }
    }

    fn describe(&self) -> String {
        match self.source {
            StaticSource::Embedded => "embedded".to_string(),
            StaticSource::Fixed(_) => "static".to_string(),
        }
    }
}
