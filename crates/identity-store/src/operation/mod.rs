//! Operation kinds and per-operation context.
//!
//! - [`OperationKind`] - The user core event a claim write runs in
//! - [`OperationContext`] - Reentrancy guard and error signal for one call chain
//! - [`IdentityErrorMessage`] - The advisory error signal (e.g. account locked)

mod context;
mod kind;
mod signal;

pub use context::{InFlightGuard, OperationContext};
pub use kind::{OperationKind, ParseOperationKindError};
pub use signal::{ErrorCode, IdentityErrorMessage};
