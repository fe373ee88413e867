//! Catalog configuration module.
//!
//! Layers, lowest priority first:
//! 1. Built-in defaults
//! 2. `catalog.toml` in the working directory (optional)
//! 3. `CATALOG_*` environment variables (e.g. `CATALOG_PAGE_SIZE=50`)
//!
//! Command line flags are applied on top by `main`.

use std::path::Path;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use storefront_core::{DEFAULT_PAGE_SIZE, RETAIL_PRODUCT_TYPE};

/// Config file looked up when no `--config` flag is given.
pub const DEFAULT_CONFIG_FILE: &str = "catalog.toml";

const DEFAULT_DATABASE_PATH: &str = "./storefront.db";

/// Catalog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// SQLite database file
    pub database_path: String,

    /// Products per listing page
    pub page_size: i64,

    /// Product type shown on the listing
    pub product_type: String,

    /// Pool size
    pub max_connections: u32,
}

impl CatalogConfig {
    /// Load configuration from the given file (if it exists) and the environment.
    pub fn load(file: &Path) -> Result<Self, ConfigError> {
        let settings = defaults()?
            .add_source(File::from(file).required(false))
            .add_source(Environment::with_prefix("CATALOG").try_parsing(true))
            .build()?;

        Self::from_settings(settings)
    }

    /// Parse configuration from TOML text over the defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let settings = defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        Self::from_settings(settings)
    }

    fn from_settings(settings: Config) -> Result<Self, ConfigError> {
        let config: CatalogConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that parse but make no sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_path.trim().is_empty() {
            return Err(ConfigError::MissingRequired("database_path".to_string()));
        }

        if self.page_size <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "page_size".to_string(),
                reason: format!("must be positive, got {}", self.page_size),
            });
        }

        if self.product_type.trim().is_empty() {
            return Err(ConfigError::MissingRequired("product_type".to_string()));
        }

        if self.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_connections".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            product_type: RETAIL_PRODUCT_TYPE.to_string(),
            max_connections: 5,
        }
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let defaults = CatalogConfig::default();

    let builder = Config::builder()
        .set_default("database_path", defaults.database_path)?
        .set_default("page_size", defaults.page_size)?
        .set_default("product_type", defaults.product_type)?
        .set_default("max_connections", i64::from(defaults.max_connections))?;

    Ok(builder)
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::from_toml_str("").unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.page_size, 20);
        assert_eq!(config.product_type, "retail");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let config = CatalogConfig::from_toml_str(
            r#"
            database_path = "/var/lib/storefront/catalog.db"
            page_size = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.database_path, "/var/lib/storefront/catalog.db");
        assert_eq!(config.page_size, 50);
        assert_eq!(config.product_type, "retail");
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let err = CatalogConfig::from_toml_str("page_size = 0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "page_size"));
    }

    #[test]
    fn test_blank_product_type_is_rejected() {
        let err = CatalogConfig::from_toml_str("product_type = \"  \"").unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequired(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = CatalogConfig::load(Path::new("/nonexistent/catalog.toml")).unwrap();
        assert!(config.page_size > 0);
    }
}
