//! User store context for identity data store operations.
//!
//! This module defines [`UserStoreContext`], the handle to the user store a
//! user operation is running against. Every data store call receives one;
//! the coordinator itself only reads the realm configuration from it.

use std::sync::Arc;

use super::config::RealmConfiguration;
use super::domain::UserStoreDomain;

/// The user store an identity data store operation runs against.
///
/// The context is passed opaquely to the data store backends. It is cheap to
/// clone: the realm configuration is shared.
///
/// # Examples
///
/// ```
/// use helios_identity_store::realm::{RealmConfiguration, UserStoreContext, UserStoreDomain};
///
/// let ctx = UserStoreContext::new(
///     UserStoreDomain::primary(),
///     RealmConfiguration::new().with_property("StoreIdentityClaims", "false"),
/// );
///
/// assert!(ctx.domain().is_primary());
/// assert!(!ctx.stores_identity_claims());
/// ```
#[derive(Debug, Clone)]
pub struct UserStoreContext {
    /// The user store domain.
    domain: UserStoreDomain,
    /// The realm configuration of the user store.
    realm_configuration: Arc<RealmConfiguration>,
    /// Optional correlation ID for request tracing.
    correlation_id: Option<String>,
}

impl UserStoreContext {
    /// Creates a new context for the given domain and realm configuration.
    pub fn new(domain: UserStoreDomain, realm_configuration: RealmConfiguration) -> Self {
        Self {
            domain,
            realm_configuration: Arc::new(realm_configuration),
            correlation_id: None,
        }
    }

    /// Creates a context for the primary user store with an empty configuration.
    pub fn primary() -> Self {
        Self::new(UserStoreDomain::primary(), RealmConfiguration::new())
    }

    /// Sets the correlation ID used for tracing.
    pub fn with_correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.correlation_id = Some(correlation_id.into());
        self
    }

    /// Returns the user store domain.
    pub fn domain(&self) -> &UserStoreDomain {
        &self.domain
    }

    /// Returns the realm configuration.
    pub fn realm_configuration(&self) -> &RealmConfiguration {
        &self.realm_configuration
    }

    /// Returns the correlation ID, if set.
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    /// Returns `true` if this user store keeps identity claims itself.
    pub fn stores_identity_claims(&self) -> bool {
        self.realm_configuration.stores_identity_claims()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::realm::STORE_IDENTITY_CLAIMS;

    #[test]
    fn test_primary_context() {
        let ctx = UserStoreContext::primary();
        assert!(ctx.domain().is_primary());
        assert!(ctx.correlation_id().is_none());
        assert!(!ctx.stores_identity_claims());
    }

    #[test]
    fn test_clone_shares_configuration() {
        let ctx = UserStoreContext::new(
            UserStoreDomain::new("ldap"),
            RealmConfiguration::new().with_property(STORE_IDENTITY_CLAIMS, "true"),
        )
        .with_correlation_id("req-1");
        let cloned = ctx.clone();

        assert!(std::ptr::eq(
            ctx.realm_configuration(),
            cloned.realm_configuration()
        ));
        assert!(cloned.stores_identity_claims());
        assert_eq!(cloned.correlation_id(), Some("req-1"));
    }
}
