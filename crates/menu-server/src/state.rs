use std::sync::Arc;
use std::time::Duration;

use menu_core::provider::RemoteCatalogConfig;
use menu_core::{
    Catalog, CatalogError, CatalogProvider, FileCatalogProvider, RemoteCatalogProvider,
    StaticCatalogProvider,
};
use tracing::{error, info};

use crate::config::{CatalogConfig, CatalogSource};
use crate::utils::ApiError;

/// Outcome of the one catalog load done at startup.
#[derive(Debug, Clone)]
pub enum CatalogState {
    Ready(Arc<Catalog>),
    /// User-facing message; the catalog is treated as empty.
    Unavailable(String),
}

impl CatalogState {
    pub async fn load(provider: &dyn CatalogProvider) -> Self {
        let source = provider.describe();
        info!("Loading menu catalog from {}", source);

        match provider.load().await {
            Ok(catalog) => {
                info!(
                    "Menu catalog ready: {} categories, {} dishes",
                    catalog.categories.len(),
                    catalog.len()
                );
                CatalogState::Ready(Arc::new(catalog))
            }
            Err(e) => {
                error!("Failed to load menu data from {}: {}", source, e);
                CatalogState::Unavailable(e.user_message().to_string())
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, CatalogState::Ready(_))
    }
}

pub struct AppState {
    pub catalog: CatalogState,
    pub source: String,
}

impl AppState {
    pub async fn load(provider: &dyn CatalogProvider) -> Self {
        Self {
            catalog: CatalogState::load(provider).await,
            source: provider.describe(),
        }
    }

    pub fn ready(catalog: Catalog) -> Self {
        Self {
            catalog: CatalogState::Ready(Arc::new(catalog)),
            source: "static".to_string(),
        }
    }

    pub fn catalog(&self) -> Result<&Catalog, ApiError> {
        match &self.catalog {
            CatalogState::Ready(catalog) => Ok(catalog),
            CatalogState::Unavailable(message) => {
                Err(ApiError::CatalogUnavailable(message.clone()))
            }
        }
    }
}

pub fn build_provider(config: &CatalogConfig) -> Result<Box<dyn CatalogProvider>, CatalogError> {
    let provider: Box<dyn CatalogProvider> = match config.source {
        CatalogSource::Embedded => Box::new(StaticCatalogProvider::embedded()),
        CatalogSource::File => {
            let path = config
                .path
                .clone()
                .ok_or_else(|| CatalogError::Config("catalog.path is not set".to_string()))?;
            Box::new(FileCatalogProvider::new(path))
        }
        CatalogSource::Remote => {
            let base_url = config
                .base_url
                .clone()
                .ok_or_else(|| CatalogError::Config("catalog.base_url is not set".to_string()))?;
            let remote = RemoteCatalogConfig::new(base_url)
                .with_timeout(Duration::from_secs(config.timeout_seconds));
            Box::new(RemoteCatalogProvider::new(remote)?)
        }
    };

    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use menu_core::MenuItem;
    use mockall::mock;

    mock! {
        pub Provider {}

        #[async_trait]
        impl CatalogProvider for Provider {
            async fn load(&self) -> Result<Catalog, CatalogError>;
            fn describe(&self) -> String;
        }
    }

    #[tokio::test]
    async fn test_load_once_on_success() {
        let catalog = Catalog::new(
            vec![],
            vec![MenuItem::new("1", "Papad", 9.5, "starters", true)],
        );
        let expected = catalog.clone();

        let mut provider = MockProvider::new();
        provider.expect_describe().return_const("mock".to_string());
        provider
            .expect_load()
            .times(1)
            .returning(move || Ok(catalog.clone()));

        let state = AppState::load(&provider).await;

        assert!(state.catalog.is_ready());
        assert_eq!(state.source, "mock");
        assert_eq!(state.catalog().unwrap(), &expected);
    }

    #[tokio::test]
    async fn test_failed_load_is_unavailable() {
        let mut provider = MockProvider::new();
        provider.expect_describe().return_const("mock".to_string());
        provider.expect_load().times(1).returning(|| {
            Err(CatalogError::Status {
                endpoint: "items".to_string(),
                status: 502,
            })
        });

        let state = AppState::load(&provider).await;

        assert!(!state.catalog.is_ready());
        match state.catalog() {
            Err(ApiError::CatalogUnavailable(message)) => {
                assert_eq!(message, "Sorry, we couldn't load the menu. Please try again later.");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_build_provider_per_source() {
        let mut config = CatalogConfig {
            source: CatalogSource::Embedded,
            base_url: None,
            path: None,
            timeout_seconds: 5,
        };
        assert_eq!(build_provider(&config).unwrap().describe(), "embedded");

        config.source = CatalogSource::Remote;
        assert!(matches!(build_provider(&config), Err(CatalogError::Config(_))));

        config.base_url = Some("http://menu.local/api/".to_string());
        assert_eq!(
            build_provider(&config).unwrap().describe(),
            "remote:http://menu.local/api"
        );

        config.source = CatalogSource::File;
        config.path = Some("menu.json".into());
        assert_eq!(build_provider(&config).unwrap().describe(), "file:menu.json");
    }
}
