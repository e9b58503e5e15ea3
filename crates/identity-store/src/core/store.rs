//! The identity data store capability contract.
//!
//! This module defines the [`IdentityDataStore`] trait that every backend
//! implements: relational tables, the user store itself, or a custom store
//! registered with the [`DataStoreRegistry`](super::DataStoreRegistry).
//! Every operation receives the [`UserStoreContext`] of the user store the
//! user lives in.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

use super::backend::{DataStoreCapability, DataStoreKind};
use crate::error::BackendResult;
use crate::realm::{UserStoreContext, UserStoreDomain};
use crate::types::{ExpressionCondition, UserIdentityClaim};

/// A dynamically typed identity data store.
pub type DynDataStore = Arc<dyn IdentityDataStore>;

/// Storage backend for per-user identity claims.
///
/// Implementations are shared across tasks behind an `Arc`; any locking
/// needed for concurrent writes to the same user is the backend's concern.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use helios_identity_store::core::{DataStoreKind, IdentityDataStore};
///
/// #[derive(Debug)]
/// struct LdapIdentityDataStore { /* ... */ }
///
/// #[async_trait]
/// impl IdentityDataStore for LdapIdentityDataStore {
///     fn kind(&self) -> DataStoreKind {
///         DataStoreKind::Custom("ldap")
///     }
///
///     async fn load(
///         &self,
///         user_name: &str,
///         user_store: &UserStoreContext,
///     ) -> BackendResult<Option<UserIdentityClaim>> {
///         // ...
///     }
///
///     // ... implement the remaining operations
/// }
/// ```
#[async_trait]
pub trait IdentityDataStore: Send + Sync + Debug {
    /// Returns the kind of this data store.
    ///
    /// The coordinator skips persistence entirely for
    /// [`DataStoreKind::UserStoreBased`] stores.
    fn kind(&self) -> DataStoreKind;

    /// Returns a human-readable name for this data store.
    fn name(&self) -> String {
        self.kind().to_string()
    }

    /// Returns the capabilities this data store implements.
    fn capabilities(&self) -> Vec<DataStoreCapability> {
        DataStoreCapability::REQUIRED.to_vec()
    }

    /// Checks if this data store supports the given capability.
    fn supports(&self, capability: DataStoreCapability) -> bool {
        self.capabilities().contains(&capability)
    }

    /// Loads the identity record of a user.
    ///
    /// Returns `None` if the user has no record yet.
    async fn load(
        &self,
        user_name: &str,
        user_store: &UserStoreContext,
    ) -> BackendResult<Option<UserIdentityClaim>>;

    /// Persists a whole identity record, replacing any previous one.
    async fn store(
        &self,
        record: &UserIdentityClaim,
        user_store: &UserStoreContext,
    ) -> BackendResult<()>;

    /// Removes the identity record of a user.
    async fn remove(&self, user_name: &str, user_store: &UserStoreContext) -> BackendResult<()>;

    /// Lists the users whose claim equals the given value.
    async fn list_by_claim_value(
        &self,
        claim_uri: &str,
        claim_value: &str,
        user_store: &UserStoreContext,
    ) -> BackendResult<Vec<String>>;

    /// Lists the users matching all expression conditions.
    ///
    /// `pre_filtered_user_names` holds users already matched by conditions
    /// evaluated elsewhere; backends intersect with it when non-empty. At most
    /// `limit` names are returned, skipping the first `offset` (0-based).
    async fn list_paginated_user_names(
        &self,
        conditions: &[ExpressionCondition],
        pre_filtered_user_names: &[String],
        domain: &UserStoreDomain,
        user_store: &UserStoreContext,
        limit: usize,
        offset: usize,
    ) -> BackendResult<Vec<String>>;
}
