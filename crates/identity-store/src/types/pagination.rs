//! Offset pagination for user listings.

use serde::{Deserialize, Serialize};

/// A `limit`/`offset` window over an ordered list of user names.
///
/// The offset is 0-based: `OffsetPage::new(2, 1)` over `[a, b, c, d]`
/// yields `[b, c]`. Ordering of the underlying list is defined by the
/// data store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetPage {
    /// Maximum number of entries to return.
    pub limit: usize,

    /// Number of leading entries to skip.
    pub offset: usize,
}

impl OffsetPage {
    /// Creates a new page window.
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// Applies the window to an iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use helios_identity_store::types::OffsetPage;
    ///
    /// let users = ["u0", "u1", "u2", "u3", "u4"];
    /// let page = OffsetPage::new(2, 1).apply(users);
    /// assert_eq!(page, vec!["u1", "u2"]);
    /// ```
    pub fn apply<T, I>(&self, items: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        items
            .into_iter()
            .skip(self.offset)
            .take(self.limit)
            .collect()
    }
}
