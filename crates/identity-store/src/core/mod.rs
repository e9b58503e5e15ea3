//! Core data store traits and resolution.
//!
//! - [`IdentityDataStore`] - The capability contract every backend implements
//! - [`DataStoreKind`] - Backend classification reported by the backend itself
//! - [`DataStoreCapability`] - Operations a backend advertises
//! - [`DataStoreRegistry`] - Selects the active backend from configuration
//!
//! # Backend Selection
//!
//! ```text
//! "jdbc"        ──► shared relational store      (DataStoreKind::Jdbc)
//! "user-store"  ──► shared user store based store (DataStoreKind::UserStoreBased)
//! anything else ──► registered factory            (usually DataStoreKind::Custom)
//! ```

pub mod backend;
pub mod registry;
pub mod store;

pub use backend::{DataStoreCapability, DataStoreKind};
pub use registry::{
    DataStoreFactory, DataStoreRegistry, DataStoreSelection, JDBC_DATA_STORE,
    LEGACY_JDBC_DATA_STORE, LEGACY_USER_STORE_BASED_DATA_STORE, USER_STORE_BASED_DATA_STORE,
};
pub use store::{DynDataStore, IdentityDataStore};
