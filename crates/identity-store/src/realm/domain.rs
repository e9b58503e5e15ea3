//! User store domain names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The domain name of the primary user store.
pub const PRIMARY_DOMAIN: &str = "PRIMARY";

/// Separator between a domain name and a user name in qualified names.
pub const DOMAIN_SEPARATOR: char = '/';

/// The domain of a user store, such as `PRIMARY` or `SECONDARY-LDAP`.
///
/// Domain names are case-insensitive and always held in upper case.
///
/// # Examples
///
/// ```
/// use helios_identity_store::realm::UserStoreDomain;
///
/// let domain = UserStoreDomain::new("secondary");
/// assert_eq!(domain.as_str(), "SECONDARY");
/// assert_eq!(domain.qualify("alice"), "SECONDARY/alice");
/// assert!(UserStoreDomain::primary().is_primary());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserStoreDomain(String);

impl UserStoreDomain {
    /// Creates a domain, normalizing it to upper case.
    ///
    /// A blank name yields the primary domain.
    pub fn new(name: impl AsRef<str>) -> Self {
        let name = name.as_ref().trim();
        if name.is_empty() {
            Self::primary()
        } else {
            Self(name.to_uppercase())
        }
    }

    /// Returns the primary user store domain.
    pub fn primary() -> Self {
        Self(PRIMARY_DOMAIN.to_string())
    }

    /// Returns the domain name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this is the primary domain.
    pub fn is_primary(&self) -> bool {
        self.0 == PRIMARY_DOMAIN
    }

    /// Prefixes a user name with this domain.
    pub fn qualify(&self, user_name: &str) -> String {
        format!("{}{}{}", self.0, DOMAIN_SEPARATOR, user_name)
    }

    /// Splits a possibly domain-qualified user name.
    ///
    /// Unqualified names belong to the primary domain.
    ///
    /// ```
    /// use helios_identity_store::realm::UserStoreDomain;
    ///
    /// let (domain, user) = UserStoreDomain::split("ldap/bob");
    /// assert_eq!(domain.as_str(), "LDAP");
    /// assert_eq!(user, "bob");
    ///
    /// let (domain, user) = UserStoreDomain::split("alice");
    /// assert!(domain.is_primary());
    /// assert_eq!(user, "alice");
    /// ```
    pub fn split(qualified: &str) -> (Self, &str) {
        match qualified.split_once(DOMAIN_SEPARATOR) {
            Some((domain, user_name)) if !domain.is_empty() => (Self::new(domain), user_name),
            _ => (Self::primary(), qualified),
        }
    }
}

impl Default for UserStoreDomain {
    fn default() -> Self {
        Self::primary()
    }
}

impl fmt::Debug for UserStoreDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserStoreDomain({})", self.0)
    }
}

impl fmt::Display for UserStoreDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserStoreDomain {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for UserStoreDomain {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for UserStoreDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
