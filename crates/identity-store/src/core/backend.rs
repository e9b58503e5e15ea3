//! Data store kinds and capabilities.
//!
//! Backends classify themselves through [`DataStoreKind`] and advertise the
//! operations they implement through [`DataStoreCapability`]. The coordinator
//! never inspects a backend's concrete type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies the type of identity data store backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataStoreKind {
    /// Identity claims kept in dedicated relational tables.
    Jdbc,
    /// Identity claims kept inline with the user record in the user store.
    UserStoreBased,
    /// A custom backend registered by name.
    Custom(&'static str),
}

impl DataStoreKind {
    /// Returns `true` for the user store based backend, which persists
    /// identity claims through the user store write path itself.
    pub fn is_user_store_based(&self) -> bool {
        matches!(self, DataStoreKind::UserStoreBased)
    }
}

impl fmt::Display for DataStoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataStoreKind::Jdbc => write!(f, "jdbc"),
            DataStoreKind::UserStoreBased => write!(f, "user-store"),
            DataStoreKind::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// Operations an identity data store may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataStoreCapability {
    /// Load a user's identity record.
    Load,
    /// Persist a user's identity record.
    Store,
    /// Remove a user's identity record.
    Remove,
    /// List users whose claim equals a value.
    ListByClaim,
    /// List users matching expression conditions, paginated.
    ListPaginated,
}

impl DataStoreCapability {
    /// The capabilities every active data store must provide.
    pub const REQUIRED: [DataStoreCapability; 5] = [
        DataStoreCapability::Load,
        DataStoreCapability::Store,
        DataStoreCapability::Remove,
        DataStoreCapability::ListByClaim,
        DataStoreCapability::ListPaginated,
    ];

    /// Returns the required capabilities missing from `supported`.
    pub fn missing_from(supported: &[DataStoreCapability]) -> Vec<DataStoreCapability> {
        Self::REQUIRED
            .into_iter()
            .filter(|c| !supported.contains(c))
            .collect()
    }
}

impl fmt::Display for DataStoreCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataStoreCapability::Load => "load",
            DataStoreCapability::Store => "store",
            DataStoreCapability::Remove => "remove",
            DataStoreCapability::ListByClaim => "list-by-claim",
            DataStoreCapability::ListPaginated => "list-paginated",
        };
        write!(f, "{}", name)
    }
}
