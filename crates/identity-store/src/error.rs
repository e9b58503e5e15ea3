//! Error types for the identity store.
//!
//! Errors are split by where they originate: resolving the active data store at
//! startup ([`ConfigurationError`]), coordinating a claim write ([`StoreError`]),
//! and the data store backends themselves ([`BackendError`]).
//! [`IdentityStoreError`] wraps all of them for the delegating operations.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

use crate::core::DataStoreCapability;

/// The umbrella error type returned by [`IdentityDataStoreService`](crate::IdentityDataStoreService).
#[derive(Error, Debug)]
pub enum IdentityStoreError {
    /// The data store could not be resolved from configuration.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Storing identity claims for a user failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A backend query failed.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// A backend operation on a specific user failed.
    #[error("identity data store operation failed for user {user_name}: {source}")]
    UserBackend {
        user_name: String,
        #[source]
        source: BackendError,
    },
}

impl IdentityStoreError {
    /// Returns the user the failed operation was acting on, if any.
    pub fn user_name(&self) -> Option<&str> {
        match self {
            IdentityStoreError::Store(err) => Some(err.user_name()),
            IdentityStoreError::UserBackend { user_name, .. } => Some(user_name),
            _ => None,
        }
    }

    /// Returns the underlying backend error, if this error came from a backend.
    pub fn backend_error(&self) -> Option<&BackendError> {
        match self {
            IdentityStoreError::Backend(err) => Some(err),
            IdentityStoreError::UserBackend { source, .. } => Some(source),
            IdentityStoreError::Store(StoreError::Load { source, .. })
            | IdentityStoreError::Store(StoreError::Persist { source, .. }) => Some(source),
            _ => None,
        }
    }
}

/// Errors raised while resolving the identity data store at startup.
///
/// All of these are fatal: there is no fallback data store.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// No data store type was configured.
    #[error("identity data store type is not configured")]
    MissingDataStoreType,

    /// A well-known data store was selected but the host never registered it.
    #[error("shared identity data store '{name}' has not been registered")]
    SharedStoreUnavailable { name: String },

    /// A shared data store reports a different kind than the slot it was registered in.
    #[error("identity data store '{name}' reports kind {actual}, expected {expected}")]
    KindMismatch {
        name: String,
        expected: String,
        actual: String,
    },

    /// No factory is registered under the configured name.
    #[error("unknown identity data store type: {name}")]
    UnknownDataStore { name: String },

    /// The factory for a custom data store failed.
    #[error("failed to instantiate identity data store '{name}': {source}")]
    InstantiationFailed {
        name: String,
        #[source]
        source: BackendError,
    },

    /// The instantiated data store does not implement the full capability set.
    #[error("identity data store '{name}' is missing capabilities: {}", format_capabilities(.missing))]
    IncompatibleDataStore {
        name: String,
        missing: Vec<DataStoreCapability>,
    },

    /// A factory registration was rejected.
    #[error("invalid identity data store registration '{name}': {message}")]
    InvalidRegistration { name: String, message: String },

    /// A configuration value failed validation.
    #[error("invalid configuration: {}", .errors.join("; "))]
    Invalid { errors: Vec<String> },
}

fn format_capabilities(capabilities: &[DataStoreCapability]) -> String {
    capabilities
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors raised while storing identity claims for a user.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The username was empty.
    #[error("cannot store identity claims for an empty user name")]
    InvalidUserName { user_name: String },

    /// The existing identity record could not be loaded.
    #[error("error while loading identity data for user: {user_name}")]
    Load {
        user_name: String,
        #[source]
        source: BackendError,
    },

    /// The merged identity record could not be persisted.
    #[error("error while saving identity data for user: {user_name}")]
    Persist {
        user_name: String,
        #[source]
        source: BackendError,
    },
}

impl StoreError {
    /// Returns the user the failed store was acting on.
    pub fn user_name(&self) -> &str {
        match self {
            StoreError::InvalidUserName { user_name }
            | StoreError::Load { user_name, .. }
            | StoreError::Persist { user_name, .. } => user_name,
        }
    }
}

/// Errors originating from an identity data store backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend is currently unavailable.
    #[error("backend unavailable: {backend_name}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// A query against the backend failed.
    #[error("query execution failed in {backend_name}: {message}")]
    QueryError {
        backend_name: String,
        message: String,
    },

    /// The record to operate on does not exist.
    #[error("identity data not found for user: {user_name}")]
    NotFound { user_name: String },

    /// The requested capability is not supported by this backend.
    #[error("capability '{capability}' not supported by {backend_name}")]
    UnsupportedCapability {
        backend_name: String,
        capability: DataStoreCapability,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {message}")]
    SerializationError { message: String },

    /// Internal backend error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for coordinator operations.
pub type IdentityStoreResult<T> = Result<T, IdentityStoreError>;

/// Result type alias for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        BackendError::SerializationError {
            message: err.to_string(),
        }
    }
}
