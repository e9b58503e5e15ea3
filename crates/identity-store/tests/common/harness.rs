//! Test harness infrastructure for coordinator testing.
//!
//! This module provides [`RecordingDataStore`], an in-memory
//! [`IdentityDataStore`] that counts calls and can be told to fail, the
//! [`ReentryHook`] that makes it call back into the coordinator from inside a
//! write, and [`TestHarness`] tying a store to a service.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use parking_lot::Mutex;

use helios_identity_store::core::{DataStoreCapability, DataStoreKind, IdentityDataStore};
use helios_identity_store::error::{BackendError, BackendResult, StoreError};
use helios_identity_store::operation::{OperationContext, OperationKind};
use helios_identity_store::realm::{UserStoreContext, UserStoreDomain};
use helios_identity_store::service::{IdentityDataStoreService, StoreOutcome};
use helios_identity_store::types::{
    ClaimMap, ExpressionCondition, OffsetPage, UserIdentityClaim,
};

/// Number of calls made to each data store operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub load: usize,
    pub store: usize,
    pub remove: usize,
    pub list_by_claim: usize,
    pub list_paginated: usize,
}

/// Calls back into the coordinator from inside a data store write.
///
/// The hook reuses the operation context of the outer call, the way a user
/// store listener fires again while the outer write is still running.
pub struct ReentryHook {
    service: OnceLock<Arc<IdentityDataStoreService>>,
    ctx: OperationContext,
    operation: OperationKind,
    claims: ClaimMap,
    outcomes: Mutex<Vec<Result<StoreOutcome, String>>>,
}

impl ReentryHook {
    /// Creates a hook that re-enters with `operation` and `claims` in `ctx`.
    pub fn new(ctx: &OperationContext, operation: OperationKind, claims: ClaimMap) -> Arc<Self> {
        Arc::new(Self {
            service: OnceLock::new(),
            ctx: ctx.clone(),
            operation,
            claims,
            outcomes: Mutex::new(Vec::new()),
        })
    }

    /// Sets the service to call back into.
    pub fn attach(&self, service: Arc<IdentityDataStoreService>) {
        let _ = self.service.set(service);
    }

    /// Returns the outcomes of every nested call made so far.
    pub fn outcomes(&self) -> Vec<Result<StoreOutcome, String>> {
        self.outcomes.lock().clone()
    }

    async fn reenter(&self, user_name: &str, user_store: &UserStoreContext) {
        let Some(service) = self.service.get() else {
            return;
        };
        let mut claims = self.claims.clone();
        let outcome = service
            .store(&self.ctx, user_name, user_store, self.operation, &mut claims)
            .await
            .map_err(|e: StoreError| e.to_string());
        self.outcomes.lock().push(outcome);
    }
}

// The service owns the store that owns this hook; printing it would recurse.
impl fmt::Debug for ReentryHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReentryHook")
            .field("attached", &self.service.get().is_some())
            .field("context", &self.ctx.id())
            .field("operation", &self.operation)
            .field("claims", &self.claims)
            .field("outcomes", &self.outcomes.lock().len())
            .finish()
    }
}

/// In-memory identity data store that records every call.
///
/// Records are keyed by domain-qualified user name. Listings are returned in
/// that key order.
#[derive(Debug)]
pub struct RecordingDataStore {
    kind: DataStoreKind,
    capabilities: Vec<DataStoreCapability>,
    records: Mutex<BTreeMap<String, UserIdentityClaim>>,
    calls: Mutex<CallCounts>,
    failing: Mutex<HashSet<DataStoreCapability>>,
    reentry: Mutex<Option<Arc<ReentryHook>>>,
}

impl Default for RecordingDataStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingDataStore {
    /// Backend name reported in errors.
    pub const NAME: &'static str = "recording";

    /// Creates an empty relational-kind store with the full capability set.
    pub fn new() -> Self {
        Self {
            kind: DataStoreKind::Jdbc,
            capabilities: DataStoreCapability::REQUIRED.to_vec(),
            records: Mutex::new(BTreeMap::new()),
            calls: Mutex::new(CallCounts::default()),
            failing: Mutex::new(HashSet::new()),
            reentry: Mutex::new(None),
        }
    }

    /// Sets the reported kind.
    pub fn with_kind(mut self, kind: DataStoreKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the advertised capabilities.
    pub fn with_capabilities(mut self, capabilities: Vec<DataStoreCapability>) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Makes every call to the operation fail until [`heal`](Self::heal) is called.
    pub fn fail(&self, capability: DataStoreCapability) {
        self.failing.lock().insert(capability);
    }

    /// Stops failing the operation.
    pub fn heal(&self, capability: DataStoreCapability) {
        self.failing.lock().remove(&capability);
    }

    /// Installs a re-entry hook fired at the start of every write.
    pub fn set_reentry_hook(&self, hook: Arc<ReentryHook>) {
        *self.reentry.lock() = Some(hook);
    }

    /// Inserts a record directly, bypassing the call counters.
    pub fn seed(&self, user_store: &UserStoreContext, record: UserIdentityClaim) {
        let key = user_store.domain().qualify(record.user_name());
        self.records.lock().insert(key, record);
    }

    /// Returns the stored record of a user, bypassing the call counters.
    pub fn record(&self, user_store: &UserStoreContext, user_name: &str) -> Option<UserIdentityClaim> {
        self.records
            .lock()
            .get(&user_store.domain().qualify(user_name))
            .cloned()
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Returns a snapshot of the call counters.
    pub fn calls(&self) -> CallCounts {
        *self.calls.lock()
    }

    fn check(&self, capability: DataStoreCapability) -> BackendResult<()> {
        if self.failing.lock().contains(&capability) {
            return Err(BackendError::Unavailable {
                backend_name: Self::NAME.to_string(),
                message: format!("{} is failing", capability),
            });
        }
        Ok(())
    }

    fn users_in(&self, domain: &UserStoreDomain) -> Vec<UserIdentityClaim> {
        self.records
            .lock()
            .iter()
            .filter(|(key, _)| UserStoreDomain::split(key).0 == *domain)
            .map(|(_, record)| record.clone())
            .collect()
    }
}

#[async_trait]
impl IdentityDataStore for RecordingDataStore {
    fn kind(&self) -> DataStoreKind {
        self.kind
    }

    fn name(&self) -> String {
        Self::NAME.to_string()
    }

    fn capabilities(&self) -> Vec<DataStoreCapability> {
        self.capabilities.clone()
    }

    async fn load(
        &self,
        user_name: &str,
        user_store: &UserStoreContext,
    ) -> BackendResult<Option<UserIdentityClaim>> {
        self.calls.lock().load += 1;
        self.check(DataStoreCapability::Load)?;
        Ok(self.record(user_store, user_name))
    }

    async fn store(
        &self,
        record: &UserIdentityClaim,
        user_store: &UserStoreContext,
    ) -> BackendResult<()> {
        self.calls.lock().store += 1;

        let hook = self.reentry.lock().clone();
        if let Some(hook) = hook {
            hook.reenter(record.user_name(), user_store).await;
        }

        self.check(DataStoreCapability::Store)?;
        self.seed(user_store, record.clone());
        Ok(())
    }

    async fn remove(&self, user_name: &str, user_store: &UserStoreContext) -> BackendResult<()> {
        self.calls.lock().remove += 1;
        self.check(DataStoreCapability::Remove)?;
        self.records
            .lock()
            .remove(&user_store.domain().qualify(user_name))
            .map(|_| ())
            .ok_or_else(|| BackendError::NotFound {
                user_name: user_name.to_string(),
            })
    }

    async fn list_by_claim_value(
        &self,
        claim_uri: &str,
        claim_value: &str,
        user_store: &UserStoreContext,
    ) -> BackendResult<Vec<String>> {
        self.calls.lock().list_by_claim += 1;
        self.check(DataStoreCapability::ListByClaim)?;
        Ok(self
            .users_in(user_store.domain())
            .into_iter()
            .filter(|record| record.claim(claim_uri) == Some(claim_value))
            .map(|record| record.user_name().to_string())
            .collect())
    }

    async fn list_paginated_user_names(
        &self,
        conditions: &[ExpressionCondition],
        pre_filtered_user_names: &[String],
        domain: &UserStoreDomain,
        _user_store: &UserStoreContext,
        limit: usize,
        offset: usize,
    ) -> BackendResult<Vec<String>> {
        self.calls.lock().list_paginated += 1;
        self.check(DataStoreCapability::ListPaginated)?;

        let matching = self
            .users_in(domain)
            .into_iter()
            .filter(|record| {
                pre_filtered_user_names.is_empty()
                    || pre_filtered_user_names
                        .iter()
                        .any(|name| name == record.user_name())
            })
            .filter(|record| {
                conditions.iter().all(|condition| {
                    record
                        .claim(&condition.attribute_name)
                        .is_some_and(|value| condition.matches(value))
                })
            })
            .map(|record| record.user_name().to_string());

        Ok(OffsetPage::new(limit, offset).apply(matching))
    }
}

/// A recording store wired to a coordinator.
#[derive(Debug, Clone)]
pub struct TestHarness {
    /// The backing store.
    pub store: Arc<RecordingDataStore>,
    /// The coordinator over `store`.
    pub service: Arc<IdentityDataStoreService>,
}

impl TestHarness {
    /// Creates a harness over the given store.
    pub fn new(store: RecordingDataStore) -> Self {
        let store = Arc::new(store);
        let service = Arc::new(IdentityDataStoreService::new(store.clone()));
        Self { store, service }
    }

    /// Creates a harness over an empty relational-kind store.
    pub fn jdbc() -> Self {
        Self::new(RecordingDataStore::new())
    }

    /// Creates a harness over an empty user store based store.
    pub fn user_store_based() -> Self {
        Self::new(RecordingDataStore::new().with_kind(DataStoreKind::UserStoreBased))
    }

    /// Installs a re-entry hook that calls back into this harness's service.
    pub fn install_reentry(&self, hook: Arc<ReentryHook>) {
        hook.attach(self.service.clone());
        self.store.set_reentry_hook(hook);
    }
}
