//! User operation kinds that trigger identity claim persistence.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The user core event an identity claim write is running in.
///
/// The kind selects behavior: only [`PreSetUserClaimValues`] raises the
/// account lock signal, and [`PreAddUserClaimValues`] skips loading the
/// existing record because a user being added cannot have one. It is also the
/// key of the reentrancy guard.
///
/// [`PreSetUserClaimValues`]: OperationKind::PreSetUserClaimValues
/// [`PreAddUserClaimValues`]: OperationKind::PreAddUserClaimValues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    /// Before several claim values of an existing user are set.
    PreSetUserClaimValues,
    /// Before a single claim value of an existing user is set.
    PreSetUserClaimValue,
    /// Before the claim values of a new user are added.
    PreAddUserClaimValues,
}

impl OperationKind {
    /// All operation kinds.
    pub const ALL: [OperationKind; 3] = [
        OperationKind::PreSetUserClaimValues,
        OperationKind::PreSetUserClaimValue,
        OperationKind::PreAddUserClaimValues,
    ];

    /// Returns the event name used by the user core.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::PreSetUserClaimValues => "PreSetUserClaimValues",
            OperationKind::PreSetUserClaimValue => "PreSetUserClaimValue",
            OperationKind::PreAddUserClaimValues => "PreAddUserClaimValues",
        }
    }

    /// Returns `true` for the pre-add event, where no prior record can exist.
    pub fn is_pre_add(&self) -> bool {
        matches!(self, OperationKind::PreAddUserClaimValues)
    }

    /// Returns `true` if a true account lock claim in this operation should
    /// raise the lock signal.
    pub fn signals_account_lock(&self) -> bool {
        matches!(self, OperationKind::PreSetUserClaimValues)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown operation kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown operation kind: {0}")]
pub struct ParseOperationKindError(pub String);

impl FromStr for OperationKind {
    type Err = ParseOperationKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        OperationKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseOperationKindError(s.to_string()))
    }
}
