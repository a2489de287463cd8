use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{info, warn};

use super::sanitize::parse_catalog_document;
use super::CatalogProvider;
use crate::domain::Catalog;
use crate::error::CatalogError;

/// Reads a `{ "categories": [...], "items": [...] }` document from disk.
pub struct FileCatalogProvider {
    path: PathBuf,
}

impl FileCatalogProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogProvider for FileCatalogProvider {
    async fn load(&self) -> Result<Catalog, CatalogError> {
        let json = tokio::fs::read_to_string(&self.path).await?;
        let (catalog, report) = parse_catalog_document(&json)?;

        if !report.is_clean() {
            warn!("{:?}: dropped records while loading: {:?}", self.path, report);
        }
        info!(
            "Loaded menu from {:?}: {} categories, {} items",
            self.path,
            catalog.categories.len(),
            catalog.items.len()
        );

        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "categories": [{{"id": "naan", "name": "Naan"}}],
                "items": [{{"id": "n1", "name": "Garlic Naan", "price": 4.0,
                            "category_id": "naan", "is_veg": true,
                            "image_ref": "/menu/GarlicNaan.jpg"}}]
            }}"#
        )
        .unwrap();

        let provider = FileCatalogProvider::new(file.path());
        let catalog = provider.load().await.unwrap();

        assert_eq!(catalog.items.len(), 1);
        assert_eq!(catalog.category_name("naan"), Some("Naan"));
        assert!(provider.describe().starts_with("file:"));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let provider = FileCatalogProvider::new("/definitely/not/here/menu.json");
        let err = provider.load().await.unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
