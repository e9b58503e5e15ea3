//! Core types for identity claim persistence.
//!
//! - [`UserIdentityClaim`] - The identity claims persisted for one user
//! - [`ClaimMap`] - A claim URI to value mapping supplied by a user operation
//! - [`ExpressionCondition`] - A filter term for paginated user listing
//! - [`OffsetPage`] - A `limit`/`offset` window over user names

mod claims;
mod expression;
mod identity_claim;
mod pagination;

pub use claims::{
    ACCOUNT_LOCK, ClaimMap, FAILED_LOGIN_ATTEMPTS, IDENTITY_CLAIM_URI_PREFIX,
    is_identity_claim, parse_bool_flag, partition_identity_claims,
};
pub use expression::{ExpressionCondition, ExpressionOperation};
pub use identity_claim::UserIdentityClaim;
pub use pagination::OffsetPage;
