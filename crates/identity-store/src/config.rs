//! Configuration for the identity store.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `IDENTITY_DATA_STORE_TYPE` | jdbc | Data store to resolve from the registry |
//! | `IDENTITY_STORE_LOG_LEVEL` | info | Log level |
//!
//! # Example
//!
//! ```rust
//! use helios_identity_store::IdentityStoreConfig;
//!
//! // Create from environment
//! let config = IdentityStoreConfig::from_env();
//!
//! // Or create programmatically
//! let config = IdentityStoreConfig {
//!     data_store_type: "user-store".to_string(),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use std::collections::HashMap;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::core::JDBC_DATA_STORE;

/// Deployment property naming the data store.
pub const DATA_STORE_TYPE_PROPERTY: &str = "IdentityDataStore.DataStoreType";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

fn default_data_store_type() -> String {
    JDBC_DATA_STORE.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Identity store configuration.
///
/// This struct can be constructed from environment variables using
/// [`IdentityStoreConfig::from_env`], from a deployment property map using
/// [`IdentityStoreConfig::from_properties`], or programmatically.
#[derive(Debug, Clone, PartialEq, Eq, Parser, Serialize, Deserialize)]
#[command(name = "identity-store")]
#[command(about = "Identity claim persistence coordinator")]
pub struct IdentityStoreConfig {
    /// Data store to use: "jdbc", "user-store", or a registered custom name.
    #[arg(long, env = "IDENTITY_DATA_STORE_TYPE", default_value = JDBC_DATA_STORE)]
    #[serde(default = "default_data_store_type")]
    pub data_store_type: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "IDENTITY_STORE_LOG_LEVEL", default_value = "info")]
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for IdentityStoreConfig {
    fn default() -> Self {
        Self {
            data_store_type: default_data_store_type(),
            log_level: default_log_level(),
        }
    }
}

impl IdentityStoreConfig {
    /// Creates a new config from environment variables.
    ///
    /// Parses environment variables without requiring command line arguments.
    pub fn from_env() -> Self {
        // Try to parse from environment, falling back to defaults
        Self::try_parse_from(["identity-store"]).unwrap_or_default()
    }

    /// Creates a config from deployment properties.
    ///
    /// Reads [`DATA_STORE_TYPE_PROPERTY`]; a missing property keeps the default.
    /// A present but blank value is kept so that [`validate`](Self::validate)
    /// reports it.
    pub fn from_properties(properties: &HashMap<String, String>) -> Self {
        let mut config = Self::default();
        if let Some(data_store_type) = properties.get(DATA_STORE_TYPE_PROPERTY) {
            config.data_store_type = data_store_type.trim().to_string();
        }
        config
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.data_store_type.trim().is_empty() {
            errors.push("Data store type cannot be empty".to_string());
        }

        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            errors.push(format!(
                "Log level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
