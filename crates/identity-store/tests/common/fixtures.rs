//! Test fixtures for identity store testing.
//!
//! Predefined user store contexts, claim maps, and seeded identity records.

use helios_identity_store::realm::{
    RealmConfiguration, STORE_IDENTITY_CLAIMS, UserStoreContext, UserStoreDomain,
};
use helios_identity_store::types::{
    ACCOUNT_LOCK, ClaimMap, FAILED_LOGIN_ATTEMPTS, UserIdentityClaim,
};

/// A non-identity claim that must stay with the caller.
pub const GIVEN_NAME: &str = "http://wso2.org/claims/givenname";

/// A non-identity claim that must stay with the caller.
pub const EMAIL: &str = "http://wso2.org/claims/emailaddress";

/// An identity claim with no special meaning to the coordinator.
pub const EMAIL_VERIFIED: &str = "http://wso2.org/claims/identity/emailVerified";

/// Context for the primary user store.
pub fn primary_context() -> UserStoreContext {
    UserStoreContext::primary().with_correlation_id("test-correlation")
}

/// Context for a secondary user store.
pub fn secondary_context() -> UserStoreContext {
    UserStoreContext::new(UserStoreDomain::new("secondary"), RealmConfiguration::new())
}

/// Context for a user store that persists identity claims itself.
pub fn self_storing_context() -> UserStoreContext {
    UserStoreContext::new(
        UserStoreDomain::new("ldap"),
        RealmConfiguration::new().with_property(STORE_IDENTITY_CLAIMS, "TRUE"),
    )
}

/// Context for a user store whose `StoreIdentityClaims` value carries
/// surrounding whitespace, which does not read as true.
pub fn padded_self_storing_context() -> UserStoreContext {
    UserStoreContext::new(
        UserStoreDomain::new("ldap"),
        RealmConfiguration::new().with_property(STORE_IDENTITY_CLAIMS, "true "),
    )
}

/// Builds a claim map from URI/value pairs.
pub fn claim_map(entries: &[(&str, &str)]) -> ClaimMap {
    entries
        .iter()
        .map(|(uri, value)| (uri.to_string(), value.to_string()))
        .collect()
}

/// Claims of a typical lock request: two identity claims, one profile claim.
pub fn lock_claims() -> ClaimMap {
    claim_map(&[
        (ACCOUNT_LOCK, "true"),
        (FAILED_LOGIN_ATTEMPTS, "5"),
        (GIVEN_NAME, "Alice"),
    ])
}

/// Claims of a typical profile update carrying one identity claim.
pub fn profile_claims() -> ClaimMap {
    claim_map(&[
        (EMAIL_VERIFIED, "true"),
        (GIVEN_NAME, "Alice"),
        (EMAIL, "alice@example.com"),
    ])
}

/// Identity record with the given claims.
pub fn identity_record(user_name: &str, entries: &[(&str, &str)]) -> UserIdentityClaim {
    UserIdentityClaim::from_claims(user_name, claim_map(entries))
}

/// Names `user0` to `user{n-1}`.
pub fn user_names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("user{}", i)).collect()
}
