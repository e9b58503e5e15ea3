//! Helios Identity Store
//!
//! This crate coordinates the persistence of identity claims: the
//! security-relevant per-user attributes (account lock state, failed login
//! counters, verification flags) that live under the
//! `http://wso2.org/claims/identity/` URI prefix. Claims arrive with user
//! operations, are merged into the user's identity record, and are written to
//! one pluggable data store chosen at startup.
//!
//! # Features
//!
//! - **Pluggable data stores**: a relational store, a user store based store,
//!   or any custom store registered by name
//! - **Reentrancy guard**: nested writes of the same operation within one call
//!   chain become no-ops
//! - **Account lock signal**: lock requests raise an advisory error message on
//!   the operation context
//! - **Delegations**: load, remove, and user listing by claim value or by
//!   paginated expression conditions
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use helios_identity_store::{
//!     DataStoreRegistry, IdentityDataStoreService, IdentityStoreConfig, OperationContext,
//!     OperationKind, UserStoreContext,
//! };
//!
//! let registry = DataStoreRegistry::new().with_jdbc_store(Arc::new(my_jdbc_store));
//! let service = IdentityDataStoreService::from_config(&IdentityStoreConfig::from_env(), &registry)?;
//!
//! let ctx = OperationContext::new();
//! let outcome = service
//!     .store(&ctx, "alice", &UserStoreContext::primary(), OperationKind::PreSetUserClaimValues, &mut claims)
//!     .await?;
//! ```
//!
//! # Modules
//!
//! - [`core`] - The data store trait, kinds and capabilities, and the registry
//! - [`service`] - The coordinator
//! - [`operation`] - Operation kinds and the per-call-chain context
//! - [`realm`] - User store context handed to data stores
//! - [`types`] - Identity records, claim helpers, expression conditions
//! - [`config`] - Startup configuration
//! - [`error`] - Error types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod core;
pub mod error;
pub mod operation;
pub mod realm;
pub mod service;
pub mod types;

// Re-export commonly used types
pub use config::IdentityStoreConfig;
pub use error::{
    BackendError, BackendResult, ConfigurationError, IdentityStoreError, IdentityStoreResult,
    StoreError,
};
pub use operation::{IdentityErrorMessage, OperationContext, OperationKind};
pub use realm::{RealmConfiguration, UserStoreContext, UserStoreDomain};
pub use service::{IdentityDataStoreService, StoreOutcome};
pub use types::{ClaimMap, ExpressionCondition, UserIdentityClaim};

pub use crate::core::{
    DataStoreCapability, DataStoreKind, DataStoreRegistry, DynDataStore, IdentityDataStore,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initializes the tracing subscriber for logging.
///
/// `RUST_LOG` takes precedence over `level` when set. Returns `false` if a
/// global subscriber was already installed, in which case nothing changes.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) -> bool {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("helios_identity_store={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()
        .is_ok()
}
