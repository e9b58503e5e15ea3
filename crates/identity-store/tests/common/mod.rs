//! Test infrastructure for the identity store.
//!
//! This module provides a recording in-memory data store, a harness wiring it
//! to the coordinator, and fixtures for user store contexts and claim maps.

#![allow(dead_code)]

pub mod fixtures;
pub mod harness;

// Re-export commonly used items
pub use fixtures::*;
pub use harness::*;
