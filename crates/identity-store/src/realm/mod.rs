//! User store context passed to identity data store operations.
//!
//! # Core Types
//!
//! - [`UserStoreContext`] - The user store an operation runs against
//! - [`RealmConfiguration`] - User store properties, including `StoreIdentityClaims`
//! - [`UserStoreDomain`] - Normalized user store domain name
//!
//! # Examples
//!
//! ```
//! use helios_identity_store::realm::{
//!     RealmConfiguration, UserStoreContext, UserStoreDomain, STORE_IDENTITY_CLAIMS,
//! };
//!
//! let ctx = UserStoreContext::new(
//!     UserStoreDomain::new("secondary"),
//!     RealmConfiguration::new().with_property(STORE_IDENTITY_CLAIMS, "true"),
//! );
//!
//! // Identity claims are kept in this user store; the coordinator will skip it.
//! assert!(ctx.stores_identity_claims());
//! ```

mod config;
mod context;
mod domain;

pub use config::{RealmConfiguration, STORE_IDENTITY_CLAIMS};
pub use context::UserStoreContext;
pub use domain::{DOMAIN_SEPARATOR, PRIMARY_DOMAIN, UserStoreDomain};
