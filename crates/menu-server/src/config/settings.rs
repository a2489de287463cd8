use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CatalogConfig {
    pub source: CatalogSource,
    /// Remote menu service, e.g. `https://api.example.com/menu`
    pub base_url: Option<String>,
    /// JSON catalog document for `source = "file"`
    pub path: Option<PathBuf>,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    Embedded, // Menu compiled into the binary
    File,
    Remote,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    /// Daily rolling log files go here when set
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Settings {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::with_defaults(Config::builder())?
            .add_source(File::with_name("config/settings").required(false))
            // Example: APP_CATALOG__BASE_URL=https://...
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(config)
    }

    pub fn with_defaults(
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>> {
        Ok(builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("catalog.source", "embedded")?
            .set_default("catalog.timeout_seconds", 10)?
            .set_default("logging.level", "info,menu_server=debug,menu_core=debug")?
            .set_default("logging.format", "pretty")?)
    }

    pub fn from_config(config: Config) -> Result<Self> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        match self.catalog.source {
            CatalogSource::Remote => {
                let has_url = self
                    .catalog
                    .base_url
                    .as_deref()
                    .is_some_and(|url| !url.trim().is_empty());
                if !has_url {
                    anyhow::bail!("catalog.base_url is required when catalog.source = \"remote\"");
                }
            }
            CatalogSource::File => {
                if self.catalog.path.is_none() {
                    anyhow::bail!("catalog.path is required when catalog.source = \"file\"");
                }
            }
            CatalogSource::Embedded => {}
        }

        if self.catalog.timeout_seconds == 0 {
            anyhow::bail!("catalog.timeout_seconds must be greater than 0");
        }

        Ok(())
    }
}
