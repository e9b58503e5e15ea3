//! Out-of-band error signal raised during claim persistence.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User core error codes carried by an [`IdentityErrorMessage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The user does not exist.
    UserDoesNotExist,
    /// The supplied credential is invalid.
    InvalidCredential,
    /// The user account is locked.
    UserIsLocked,
}

impl ErrorCode {
    /// Returns the numeric code used by the user core.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::UserDoesNotExist => "17001",
            ErrorCode::InvalidCredential => "17002",
            ErrorCode::UserIsLocked => "17003",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Advisory error context left for the layer above the coordinator.
///
/// It is written into the [`OperationContext`](super::OperationContext)
/// rather than returned: the operation that raised it may still succeed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityErrorMessage {
    error_code: ErrorCode,
    raised_at: DateTime<Utc>,
}

impl IdentityErrorMessage {
    /// Creates a message with the given code.
    pub fn new(error_code: ErrorCode) -> Self {
        Self {
            error_code,
            raised_at: Utc::now(),
        }
    }

    /// Creates the account locked message.
    pub fn user_locked() -> Self {
        Self::new(ErrorCode::UserIsLocked)
    }

    /// Returns the error code.
    pub fn error_code(&self) -> ErrorCode {
        self.error_code
    }

    /// Returns when the message was raised.
    pub fn raised_at(&self) -> DateTime<Utc> {
        self.raised_at
    }

    /// Returns `true` if this is the account locked message.
    pub fn is_user_locked(&self) -> bool {
        self.error_code == ErrorCode::UserIsLocked
    }
}
