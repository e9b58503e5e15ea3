//! Per-call-chain state for identity claim persistence.
//!
//! An [`OperationContext`] carries the two pieces of state that must survive
//! nested calls within one logical user operation: the set of in-flight
//! [`OperationKind`]s (the reentrancy guard) and the slot for the advisory
//! [`IdentityErrorMessage`]. Independent operations use independent contexts,
//! so no state is shared between them.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use super::kind::OperationKind;
use super::signal::IdentityErrorMessage;

/// State shared by every clone of an [`OperationContext`].
#[derive(Debug)]
struct OperationState {
    id: Uuid,
    in_flight: Mutex<HashSet<OperationKind>>,
    error_message: Mutex<Option<IdentityErrorMessage>>,
}

/// The context of one logical user operation.
///
/// Clones share state, so a context handed down a call chain (including to a
/// data store that calls back into the coordinator) sees the same guard set
/// and error slot.
///
/// # Examples
///
/// ```
/// use helios_identity_store::operation::{OperationContext, OperationKind};
///
/// let ctx = OperationContext::new();
/// let kind = OperationKind::PreSetUserClaimValues;
///
/// {
///     let _guard = ctx.enter(kind).expect("not yet in flight");
///     assert!(ctx.is_in_flight(kind));
///     assert!(ctx.enter(kind).is_none());
/// }
///
/// assert!(!ctx.is_in_flight(kind));
/// ```
#[derive(Debug, Clone)]
pub struct OperationContext {
    state: Arc<OperationState>,
}

impl OperationContext {
    /// Creates a new context with a fresh ID.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    /// Creates a new context with the given ID.
    pub fn with_id(id: Uuid) -> Self {
        Self {
            state: Arc::new(OperationState {
                id,
                in_flight: Mutex::new(HashSet::new()),
                error_message: Mutex::new(None),
            }),
        }
    }

    /// Returns the context ID, used to correlate log events.
    pub fn id(&self) -> Uuid {
        self.state.id
    }

    /// Returns `true` if the operation kind is in flight.
    pub fn is_in_flight(&self, kind: OperationKind) -> bool {
        self.state.in_flight.lock().contains(&kind)
    }

    /// Marks the operation kind as in flight.
    ///
    /// Returns `None` if it already is. Otherwise the mark is held until the
    /// returned guard is dropped.
    pub fn enter(&self, kind: OperationKind) -> Option<InFlightGuard> {
        if self.state.in_flight.lock().insert(kind) {
            Some(InFlightGuard {
                state: Arc::clone(&self.state),
                kind,
            })
        } else {
            None
        }
    }

    /// Sets the error message, replacing any previous one.
    pub fn set_error_message(&self, message: IdentityErrorMessage) {
        *self.state.error_message.lock() = Some(message);
    }

    /// Returns a copy of the current error message.
    pub fn error_message(&self) -> Option<IdentityErrorMessage> {
        self.state.error_message.lock().clone()
    }

    /// Removes and returns the current error message.
    pub fn take_error_message(&self) -> Option<IdentityErrorMessage> {
        self.state.error_message.lock().take()
    }

    /// Returns `true` if the account locked message has been raised.
    pub fn is_user_locked(&self) -> bool {
        self.state
            .error_message
            .lock()
            .as_ref()
            .is_some_and(IdentityErrorMessage::is_user_locked)
    }
}

impl Default for OperationContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Holds an operation kind in flight until dropped.
#[derive(Debug)]
#[must_use = "the operation kind is released as soon as the guard is dropped"]
pub struct InFlightGuard {
    state: Arc<OperationState>,
    kind: OperationKind,
}

impl InFlightGuard {
    /// Returns the guarded operation kind.
    pub fn kind(&self) -> OperationKind {
        self.kind
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.state.in_flight.lock().remove(&self.kind);
    }
}
