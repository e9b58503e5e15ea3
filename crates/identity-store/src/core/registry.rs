//! Resolution of the active identity data store.
//!
//! The data store is chosen once, at startup, from a single configuration
//! value. Two names are well known and select the shared instances the host
//! registered; any other name selects a factory registered under that name.
//!
//! ```
//! use std::sync::Arc;
//!
//! use helios_identity_store::core::{DataStoreRegistry, JDBC_DATA_STORE};
//! use helios_identity_store::error::ConfigurationError;
//!
//! let registry = DataStoreRegistry::new();
//!
//! // Nothing registered for the well-known relational store yet.
//! assert!(matches!(
//!     registry.resolve(JDBC_DATA_STORE),
//!     Err(ConfigurationError::SharedStoreUnavailable { .. })
//! ));
//!
//! // Blank names are rejected outright.
//! assert!(matches!(
//!     registry.resolve("  "),
//!     Err(ConfigurationError::MissingDataStoreType)
//! ));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::info;

use super::backend::{DataStoreCapability, DataStoreKind};
use super::store::DynDataStore;
use crate::error::{BackendResult, ConfigurationError};

/// Name of the shared relational data store.
pub const JDBC_DATA_STORE: &str = "jdbc";

/// Name of the shared user store based data store.
pub const USER_STORE_BASED_DATA_STORE: &str = "user-store";

/// Fully qualified name of the relational data store accepted from older
/// deployment configurations.
pub const LEGACY_JDBC_DATA_STORE: &str =
    "org.wso2.carbon.identity.governance.store.JDBCIdentityDataStore";

/// Fully qualified name of the user store based data store accepted from
/// older deployment configurations.
pub const LEGACY_USER_STORE_BASED_DATA_STORE: &str =
    "org.wso2.carbon.identity.governance.store.UserStoreBasedIdentityDataStore";

/// Creates a custom data store instance.
pub type DataStoreFactory = Arc<dyn Fn() -> BackendResult<DynDataStore> + Send + Sync>;

/// Which data store a configuration value selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataStoreSelection {
    /// The shared relational data store.
    Jdbc,
    /// The shared user store based data store.
    UserStoreBased,
    /// A custom data store registered under this name.
    Custom(String),
}

impl DataStoreSelection {
    /// Classifies a configuration value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingDataStoreType`] for a blank value.
    pub fn parse(identifier: &str) -> Result<Self, ConfigurationError> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(ConfigurationError::MissingDataStoreType);
        }

        Ok(match identifier {
            JDBC_DATA_STORE | LEGACY_JDBC_DATA_STORE => DataStoreSelection::Jdbc,
            USER_STORE_BASED_DATA_STORE | LEGACY_USER_STORE_BASED_DATA_STORE => {
                DataStoreSelection::UserStoreBased
            }
            other => DataStoreSelection::Custom(other.to_string()),
        })
    }

    /// Returns `true` if the name is reserved for a shared data store.
    pub fn is_well_known(identifier: &str) -> bool {
        matches!(
            Self::parse(identifier),
            Ok(DataStoreSelection::Jdbc | DataStoreSelection::UserStoreBased)
        )
    }
}

/// Registry of the data stores available for selection.
///
/// The host registers the two shared instances and any number of named
/// factories, then calls [`resolve`](Self::resolve) with the configured name.
#[derive(Clone, Default)]
pub struct DataStoreRegistry {
    jdbc: Option<DynDataStore>,
    user_store_based: Option<DynDataStore>,
    factories: HashMap<String, DataStoreFactory>,
}

impl DataStoreRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the shared relational data store.
    pub fn with_jdbc_store(mut self, store: DynDataStore) -> Self {
        self.jdbc = Some(store);
        self
    }

    /// Registers the shared user store based data store.
    pub fn with_user_store_based_store(mut self, store: DynDataStore) -> Self {
        self.user_store_based = Some(store);
        self
    }

    /// Registers a factory for a custom data store.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidRegistration`] if the name is
    /// blank, reserved for a shared data store, or already registered.
    pub fn register<F>(
        &mut self,
        name: impl Into<String>,
        factory: F,
    ) -> Result<(), ConfigurationError>
    where
        F: Fn() -> BackendResult<DynDataStore> + Send + Sync + 'static,
    {
        let name = name.into().trim().to_string();
        let invalid = |message: &str| ConfigurationError::InvalidRegistration {
            name: name.clone(),
            message: message.to_string(),
        };

        if name.is_empty() {
            return Err(invalid("name must not be blank"));
        }
        if DataStoreSelection::is_well_known(&name) {
            return Err(invalid("name is reserved for a shared data store"));
        }
        if self.factories.contains_key(&name) {
            return Err(invalid("name is already registered"));
        }

        self.factories.insert(name, Arc::new(factory));
        Ok(())
    }

    /// Registers a factory, consuming and returning the registry.
    pub fn with_factory<F>(
        mut self,
        name: impl Into<String>,
        factory: F,
    ) -> Result<Self, ConfigurationError>
    where
        F: Fn() -> BackendResult<DynDataStore> + Send + Sync + 'static,
    {
        self.register(name, factory)?;
        Ok(self)
    }

    /// Returns `true` if a factory is registered under the name.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name.trim())
    }

    /// Returns the names of all registered factories, sorted.
    pub fn factory_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolves the data store selected by a configuration value.
    ///
    /// Well-known names return the shared instance itself (the same `Arc`);
    /// other names invoke the registered factory. The resolved store must
    /// implement every [`DataStoreCapability::REQUIRED`] operation.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the value is blank, the selected
    /// store is not registered or cannot be instantiated, or it is missing
    /// required capabilities.
    pub fn resolve(&self, identifier: &str) -> Result<DynDataStore, ConfigurationError> {
        let selection = DataStoreSelection::parse(identifier)?;

        let (name, store) = match selection {
            DataStoreSelection::Jdbc => (
                JDBC_DATA_STORE.to_string(),
                shared(JDBC_DATA_STORE, self.jdbc.as_ref(), DataStoreKind::Jdbc)?,
            ),
            DataStoreSelection::UserStoreBased => (
                USER_STORE_BASED_DATA_STORE.to_string(),
                shared(
                    USER_STORE_BASED_DATA_STORE,
                    self.user_store_based.as_ref(),
                    DataStoreKind::UserStoreBased,
                )?,
            ),
            DataStoreSelection::Custom(name) => {
                let factory = self.factories.get(&name).ok_or_else(|| {
                    ConfigurationError::UnknownDataStore { name: name.clone() }
                })?;
                let store = factory().map_err(|source| ConfigurationError::InstantiationFailed {
                    name: name.clone(),
                    source,
                })?;
                (name, store)
            }
        };

        let missing = DataStoreCapability::missing_from(&store.capabilities());
        if !missing.is_empty() {
            return Err(ConfigurationError::IncompatibleDataStore { name, missing });
        }

        info!(
            selected = %name,
            data_store = %store.name(),
            kind = %store.kind(),
            "Resolved identity data store"
        );

        Ok(store)
    }
}

fn shared(
    name: &str,
    store: Option<&DynDataStore>,
    expected: DataStoreKind,
) -> Result<DynDataStore, ConfigurationError> {
    let store = store.ok_or_else(|| ConfigurationError::SharedStoreUnavailable {
        name: name.to_string(),
    })?;

    let actual = store.kind();
    if actual != expected {
        return Err(ConfigurationError::KindMismatch {
            name: name.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }

    Ok(Arc::clone(store))
}

impl fmt::Debug for DataStoreRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataStoreRegistry")
            .field("jdbc", &self.jdbc)
            .field("user_store_based", &self.user_store_based)
            .field("factories", &self.factory_names())
            .finish()
    }
}
