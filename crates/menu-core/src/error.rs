//! Catalog errors

use thiserror::Error;

/// Message shown to visitors whenever the catalog could not be loaded.
pub const CATALOG_LOAD_ERROR: &str = "Sorry, we couldn't load the menu. Please try again later.";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog service returned {status} for {endpoint}")]
    Status { endpoint: String, status: u16 },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// Generic user-facing text. Details stay in the logs.
    pub fn user_message(&self) -> &'static str {
        CATALOG_LOAD_ERROR
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err.to_string())
    }
}
