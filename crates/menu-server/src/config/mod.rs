pub mod settings;

pub use settings::{CatalogConfig, CatalogSource, LogFormat, LoggingConfig, ServerConfig, Settings};
