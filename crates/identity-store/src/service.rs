//! The identity claim persistence coordinator.
//!
//! [`IdentityDataStoreService`] sits between user operations and the active
//! [`IdentityDataStore`]. Writes go through [`store`](IdentityDataStoreService::store),
//! which decides whether persistence is needed at all, guards against
//! re-entrant writes of the same operation, and merges the identity claims of
//! the operation into the user's record. Reads, listings and removal are
//! delegated to the data store unchanged.
//!
//! # Store Flow
//!
//! ```text
//! store(ctx, user, user_store, operation, claims)
//!   │
//!   ├─ pre-set with accountLocked=true ─► raise UserIsLocked in ctx (continue)
//!   ├─ user store based / StoreIdentityClaims ─► DelegatedToUserStore
//!   ├─ operation already in flight in ctx ─► AlreadyInFlight
//!   ├─ load record (skipped for pre-add) or start empty
//!   ├─ move identity claims from `claims` into the record
//!   └─ persist the whole record ─► Persisted
//! ```

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::config::IdentityStoreConfig;
use crate::core::{DataStoreRegistry, DynDataStore, IdentityDataStore};
use crate::error::{ConfigurationError, IdentityStoreError, IdentityStoreResult, StoreError};
use crate::operation::{IdentityErrorMessage, OperationContext, OperationKind};
use crate::realm::{UserStoreContext, UserStoreDomain};
use crate::types::{
    ACCOUNT_LOCK, ClaimMap, ExpressionCondition, UserIdentityClaim, parse_bool_flag,
    partition_identity_claims,
};

/// How a successful [`store`](IdentityDataStoreService::store) call completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOutcome {
    /// The merged record was written to the data store.
    Persisted,
    /// Identity claims are persisted by the user store itself; nothing was written.
    DelegatedToUserStore,
    /// The same operation is already storing claims in this context; nothing was written.
    AlreadyInFlight,
}

impl StoreOutcome {
    /// Returns `true`; every outcome is a success.
    pub fn is_success(&self) -> bool {
        true
    }

    /// Returns `true` if the data store was written.
    pub fn is_persisted(&self) -> bool {
        matches!(self, StoreOutcome::Persisted)
    }
}

/// Coordinates identity claim persistence against the active data store.
///
/// The data store is fixed at construction. The service is cheap to share
/// behind an `Arc` and holds no per-call state; that lives in the
/// [`OperationContext`] passed to [`store`](Self::store).
#[derive(Debug, Clone)]
pub struct IdentityDataStoreService {
    data_store: DynDataStore,
}

impl IdentityDataStoreService {
    /// Creates a service over an already resolved data store.
    pub fn new(data_store: DynDataStore) -> Self {
        Self { data_store }
    }

    /// Resolves the configured data store from the registry.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the configuration is invalid or the
    /// data store cannot be resolved. There is no fallback store.
    pub fn from_config(
        config: &IdentityStoreConfig,
        registry: &DataStoreRegistry,
    ) -> Result<Self, ConfigurationError> {
        config
            .validate()
            .map_err(|errors| ConfigurationError::Invalid { errors })?;
        let data_store = registry.resolve(&config.data_store_type)?;
        Ok(Self::new(data_store))
    }

    /// Returns the active data store.
    pub fn data_store(&self) -> &DynDataStore {
        &self.data_store
    }

    /// Returns `true` if the active data store is user store based.
    ///
    /// Callers use this to decide whether they need to call [`store`](Self::store) at all.
    pub fn is_user_store_based(&self) -> bool {
        self.data_store.kind().is_user_store_based()
    }

    /// Stores the identity claims of a user operation.
    ///
    /// Identity claims (keys containing the identity claim URI prefix) are
    /// moved out of `claims` into the user's record, which is then persisted
    /// as a whole. Other claims stay in `claims` for the caller.
    ///
    /// A `PreSetUserClaimValues` operation carrying a true account lock claim
    /// raises [`IdentityErrorMessage::user_locked`] in `ctx` before anything
    /// else is checked; this does not stop the write. Only an exact,
    /// case-insensitive `"true"` counts.
    ///
    /// # Errors
    ///
    /// * [`StoreError::InvalidUserName`] - If `user_name` is blank
    /// * [`StoreError::Load`] - If the existing record could not be loaded
    /// * [`StoreError::Persist`] - If the data store rejected the record
    ///
    /// Failures are not retried. The in-flight mark for `operation` is
    /// released on every exit path.
    #[instrument(
        skip(self, ctx, user_store, claims),
        fields(user = %user_name, operation = %operation, context = %ctx.id())
    )]
    pub async fn store(
        &self,
        ctx: &OperationContext,
        user_name: &str,
        user_store: &UserStoreContext,
        operation: OperationKind,
        claims: &mut ClaimMap,
    ) -> Result<StoreOutcome, StoreError> {
        if operation.signals_account_lock()
            && parse_bool_flag(claims.get(ACCOUNT_LOCK).map(String::as_str))
        {
            warn!("Account lock requested; raising user locked signal");
            ctx.set_error_message(IdentityErrorMessage::user_locked());
        }

        if user_name.trim().is_empty() {
            return Err(StoreError::InvalidUserName {
                user_name: user_name.to_string(),
            });
        }

        if self.is_user_store_based() || user_store.stores_identity_claims() {
            debug!("Identity claims are persisted by the user store; skipping");
            return Ok(StoreOutcome::DelegatedToUserStore);
        }

        let Some(_in_flight) = ctx.enter(operation) else {
            debug!("Operation already storing identity claims in this context; skipping");
            return Ok(StoreOutcome::AlreadyInFlight);
        };

        let mut record = if operation.is_pre_add() {
            None
        } else {
            self.data_store
                .load(user_name, user_store)
                .await
                .map_err(|source| {
                    warn!(error = %source, "Failed to load identity record");
                    StoreError::Load {
                        user_name: user_name.to_string(),
                        source,
                    }
                })?
        }
        .unwrap_or_else(|| UserIdentityClaim::new(user_name));

        let (identity_claims, remaining) = partition_identity_claims(std::mem::take(claims));
        *claims = remaining;
        debug!(
            identity_claims = identity_claims.len(),
            remaining_claims = claims.len(),
            "Merging identity claims into record"
        );
        record.merge_claims(identity_claims);

        self.data_store
            .store(&record, user_store)
            .await
            .map_err(|source| {
                warn!(error = %source, "Failed to persist identity record");
                StoreError::Persist {
                    user_name: user_name.to_string(),
                    source,
                }
            })?;

        Ok(StoreOutcome::Persisted)
    }

    /// Loads the identity record of a user.
    #[instrument(skip(self, user_store), fields(user = %user_name))]
    pub async fn load(
        &self,
        user_name: &str,
        user_store: &UserStoreContext,
    ) -> IdentityStoreResult<Option<UserIdentityClaim>> {
        self.data_store
            .load(user_name, user_store)
            .await
            .map_err(|source| IdentityStoreError::UserBackend {
                user_name: user_name.to_string(),
                source,
            })
    }

    /// Lists the users whose claim equals the given value.
    #[instrument(skip(self, claim_value, user_store), fields(claim = %claim_uri))]
    pub async fn list_by_claim_value(
        &self,
        claim_uri: &str,
        claim_value: &str,
        user_store: &UserStoreContext,
    ) -> IdentityStoreResult<Vec<String>> {
        Ok(self
            .data_store
            .list_by_claim_value(claim_uri, claim_value, user_store)
            .await?)
    }

    /// Lists the users matching all expression conditions.
    ///
    /// Returns at most `limit` names, skipping the first `offset` (0-based).
    /// The ordering is defined by the data store.
    #[instrument(
        skip(self, conditions, pre_filtered_user_names, user_store),
        fields(domain = %domain)
    )]
    pub async fn list_paginated(
        &self,
        conditions: &[ExpressionCondition],
        pre_filtered_user_names: &[String],
        domain: &UserStoreDomain,
        user_store: &UserStoreContext,
        limit: usize,
        offset: usize,
    ) -> IdentityStoreResult<Vec<String>> {
        Ok(self
            .data_store
            .list_paginated_user_names(
                conditions,
                pre_filtered_user_names,
                domain,
                user_store,
                limit,
                offset,
            )
            .await?)
    }

    /// Removes the identity record of a user.
    #[instrument(skip(self, user_store), fields(user = %user_name))]
    pub async fn remove(
        &self,
        user_name: &str,
        user_store: &UserStoreContext,
    ) -> IdentityStoreResult<()> {
        self.data_store
            .remove(user_name, user_store)
            .await
            .map_err(|source| {
                warn!(error = %source, "Failed to remove identity record");
                IdentityStoreError::UserBackend {
                    user_name: user_name.to_string(),
                    source,
                }
            })
    }
}

impl From<Arc<dyn IdentityDataStore>> for IdentityDataStoreService {
    fn from(data_store: Arc<dyn IdentityDataStore>) -> Self {
        Self::new(data_store)
    }
}
