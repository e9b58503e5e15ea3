//! Realm configuration exposed by a user store.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::parse_bool_flag;

/// User store property that, when true, keeps identity claims in the user
/// store itself instead of the identity data store.
pub const STORE_IDENTITY_CLAIMS: &str = "StoreIdentityClaims";

/// The realm configuration of a user store.
///
/// Only the user store properties are modelled; the coordinator reads a
/// single boolean from them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealmConfiguration {
    #[serde(default)]
    user_store_properties: HashMap<String, String>,
}

impl RealmConfiguration {
    /// Creates an empty realm configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a realm configuration from a property map.
    pub fn from_properties(properties: HashMap<String, String>) -> Self {
        Self {
            user_store_properties: properties,
        }
    }

    /// Adds a user store property.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.user_store_properties.insert(name.into(), value.into());
        self
    }

    /// Returns a user store property by name.
    pub fn user_store_property(&self, name: &str) -> Option<&str> {
        self.user_store_properties.get(name).map(String::as_str)
    }

    /// Returns all user store properties.
    pub fn user_store_properties(&self) -> &HashMap<String, String> {
        &self.user_store_properties
    }

    /// Returns `true` if the user store keeps identity claims itself.
    pub fn stores_identity_claims(&self) -> bool {
        parse_bool_flag(self.user_store_property(STORE_IDENTITY_CLAIMS))
    }
}
