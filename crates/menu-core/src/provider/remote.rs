//! Remote menu service client.
//!
//! Two read-only GETs, `{base_url}/items` and `{base_url}/categories`, issued
//! concurrently. No retries; a failed load surfaces as an error and the
//! caller shows an empty catalog.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::sanitize::{build_catalog, decode_records, SanitizeReport};
use super::CatalogProvider;
use crate::domain::category::null_as_empty;
use crate::domain::{Catalog, Category, MenuItem};
use crate::error::CatalogError;

#[derive(Debug, Clone)]
pub struct RemoteCatalogConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl RemoteCatalogConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Deserialize)]
struct RemoteCategory {
    id_name: String,
    name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    subcategories: Vec<String>,
}

/// Items carry either the populated category document or just its id.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RemoteCategoryRef {
    Populated(RemoteCategory),
    Id(String),
}

#[derive(Debug, Deserialize)]
struct RemoteImage {
    url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteMenuItem {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    price: Option<f64>,
    category: Option<RemoteCategoryRef>,
    subcategory: Option<String>,
    is_veg: bool,
    image: Option<RemoteImage>,
}

impl From<RemoteCategory> for Category {
    fn from(remote: RemoteCategory) -> Self {
        Category {
            id: remote.id_name,
            name: remote.name,
            subcategories: remote.subcategories,
        }
    }
}

impl TryFrom<RemoteMenuItem> for MenuItem {
    type Error = CatalogError;

    fn try_from(remote: RemoteMenuItem) -> Result<Self, Self::Error> {
        let invalid = |reason: &str| CatalogError::InvalidRecord {
            id: remote.id.clone(),
            reason: reason.to_string(),
        };

        let price = remote.price.ok_or_else(|| invalid("missing price"))?;
        let category_id = match &remote.category {
            Some(RemoteCategoryRef::Populated(c)) => c.id_name.clone(),
            Some(RemoteCategoryRef::Id(id)) => id.clone(),
            None => return Err(invalid("missing category")),
        };

        Ok(MenuItem {
            id: remote.id,
            name: remote.name,
            price,
            category_id,
            subcategory: remote.subcategory.filter(|s| !s.trim().is_empty()),
            is_veg: remote.is_veg,
            image_ref: remote.image.map(|i| i.url).unwrap_or_default(),
        })
    }
}

pub struct RemoteCatalogProvider {
    client: Client,
    base_url: String,
}

impl RemoteCatalogProvider {
    pub fn new(config: RemoteCatalogConfig) -> Result<Self, CatalogError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(CatalogError::Config("remote catalog base_url is empty".to_string()));
        }

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_records(&self, endpoint: &str) -> Result<Vec<Value>, CatalogError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!("Catalog service returned {} for {}", status, url);
            return Err(CatalogError::Status {
                endpoint: endpoint.to_string(),
                status,
            });
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| CatalogError::Decode(format!("{}: {}", endpoint, e)))?;

        match json {
            Value::Array(records) => Ok(records),
            other => Err(CatalogError::Decode(format!(
                "{}: expected a JSON array, got {}",
                endpoint,
                json_kind(&other)
            ))),
        }
    }
}

#[async_trait]
impl CatalogProvider for RemoteCatalogProvider {
    async fn load(&self) -> Result<Catalog, CatalogError> {
        info!("Fetching menu from {}", self.base_url);

        let (raw_items, raw_categories) =
            tokio::try_join!(self.fetch_records("items"), self.fetch_records("categories"))?;

        let mut report = SanitizeReport::default();
        let categories = decode_records::<RemoteCategory>(
            raw_categories,
            "category",
            &mut report.skipped_categories,
        );
        let items =
            decode_records::<RemoteMenuItem>(raw_items, "menu item", &mut report.skipped_items);

        let catalog = build_catalog(
            categories.into_iter().map(|c| Ok(c.into())).collect(),
            items.into_iter().map(MenuItem::try_from).collect(),
            &mut report,
        );

        if !report.is_clean() {
            warn!("Dropped records from catalog service: {:?}", report);
        }
        info!(
            "Loaded remote menu: {} categories, {} items",
            catalog.categories.len(),
            catalog.items.len()
        );

        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!("remote:{}", self.base_url)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
