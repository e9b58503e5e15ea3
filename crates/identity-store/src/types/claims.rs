//! Claim URIs and claim map partitioning.

use std::collections::HashMap;

/// A mapping from claim URI to claim value, as supplied by a user operation.
pub type ClaimMap = HashMap<String, String>;

/// URI prefix shared by all identity claims.
///
/// Identity claims describe the account rather than the person (lock state,
/// verification flags, challenge question state) and are persisted in the
/// identity data store instead of the user store.
pub const IDENTITY_CLAIM_URI_PREFIX: &str = "http://wso2.org/claims/identity/";

/// Claim holding the account lock flag.
pub const ACCOUNT_LOCK: &str = "http://wso2.org/claims/identity/accountLocked";

/// Claim holding the number of consecutive failed login attempts.
pub const FAILED_LOGIN_ATTEMPTS: &str = "http://wso2.org/claims/identity/failedLoginAttempts";

/// Returns `true` if the claim URI belongs to the identity claim namespace.
pub fn is_identity_claim(claim_uri: &str) -> bool {
    claim_uri.contains(IDENTITY_CLAIM_URI_PREFIX)
}

/// Splits a claim map into `(identity_claims, remaining_claims)`.
///
/// The two maps are disjoint and together hold every entry of `claims`.
///
/// # Examples
///
/// ```
/// use helios_identity_store::types::{partition_identity_claims, ClaimMap, ACCOUNT_LOCK};
///
/// let mut claims = ClaimMap::new();
/// claims.insert(ACCOUNT_LOCK.to_string(), "true".to_string());
/// claims.insert("http://wso2.org/claims/givenname".to_string(), "Alice".to_string());
///
/// let (identity, remaining) = partition_identity_claims(claims);
/// assert_eq!(identity.len(), 1);
/// assert!(identity.contains_key(ACCOUNT_LOCK));
/// assert!(remaining.contains_key("http://wso2.org/claims/givenname"));
/// ```
pub fn partition_identity_claims(claims: ClaimMap) -> (ClaimMap, ClaimMap) {
    claims
        .into_iter()
        .partition(|(claim_uri, _)| is_identity_claim(claim_uri))
}

/// Parses a boolean flag the way the user core does: only a case-insensitive
/// `"true"` is true, anything else (including a missing value) is false.
///
/// Surrounding whitespace is not stripped; `" true"` is false.
pub fn parse_bool_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("true"))
}
