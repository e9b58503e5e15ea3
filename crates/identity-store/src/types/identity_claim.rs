//! The per-user identity claim record.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::claims::{ACCOUNT_LOCK, ClaimMap, parse_bool_flag};

/// The identity claims persisted for one user.
///
/// A record is keyed by user name within a user store context. It is always
/// written as a whole; the coordinator only ever grows it by merging in
/// identity claims from a user operation.
///
/// # Examples
///
/// ```
/// use helios_identity_store::types::{UserIdentityClaim, ACCOUNT_LOCK};
///
/// let mut record = UserIdentityClaim::new("alice");
/// record.set_claim(ACCOUNT_LOCK, "true");
///
/// assert_eq!(record.user_name(), "alice");
/// assert!(record.is_account_locked());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentityClaim {
    user_name: String,

    #[serde(default)]
    claims: HashMap<String, String>,
}

impl UserIdentityClaim {
    /// Creates an empty record for the given user.
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            claims: HashMap::new(),
        }
    }

    /// Creates a record from claims already held by a backend.
    pub fn from_claims(user_name: impl Into<String>, claims: ClaimMap) -> Self {
        Self {
            user_name: user_name.into(),
            claims,
        }
    }

    /// Returns the user this record belongs to.
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Returns all identity claims in the record.
    pub fn claims(&self) -> &HashMap<String, String> {
        &self.claims
    }

    /// Returns the value of a single claim.
    pub fn claim(&self, claim_uri: &str) -> Option<&str> {
        self.claims.get(claim_uri).map(String::as_str)
    }

    /// Returns `true` if the record holds the given claim.
    pub fn contains_claim(&self, claim_uri: &str) -> bool {
        self.claims.contains_key(claim_uri)
    }

    /// Sets a claim, returning the previous value.
    pub fn set_claim(
        &mut self,
        claim_uri: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.claims.insert(claim_uri.into(), value.into())
    }

    /// Removes a claim, returning its value.
    pub fn remove_claim(&mut self, claim_uri: &str) -> Option<String> {
        self.claims.remove(claim_uri)
    }

    /// Merges claims into the record. Incoming values win.
    pub fn merge_claims(&mut self, claims: ClaimMap) {
        self.claims.extend(claims);
    }

    /// Returns `true` if the account lock claim is set to true.
    pub fn is_account_locked(&self) -> bool {
        parse_bool_flag(self.claim(ACCOUNT_LOCK))
    }

    /// Returns the number of claims in the record.
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Returns `true` if the record holds no claims.
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Consumes the record, returning its claims.
    pub fn into_claims(self) -> ClaimMap {
        self.claims
    }
}
