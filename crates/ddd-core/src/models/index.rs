//! User-facing list positions.

use serde::{Deserialize, Serialize};

use crate::error::{AddressBookError, Result};

/// A position in the displayed list.
///
/// Users see 1-based positions while the list is accessed 0-based. The type
/// stores the 0-based offset so `one_based() == zero_based() + 1` always
/// holds and a 1-based value of zero cannot be constructed.
///
/// # Examples
///
/// ```rust
/// use ddd_core::models::Index;
///
/// let index = Index::from_one_based(3).unwrap();
/// assert_eq!(index.zero_based(), 2);
/// assert_eq!(index, Index::from_zero_based(2));
/// assert!(Index::from_one_based(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Index(usize);

impl Index {
    /// Creates an index from a 1-based position.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::InvalidInput` when `one_based` is zero.
    pub fn from_one_based(one_based: usize) -> Result<Self> {
        one_based
            .checked_sub(1)
            .map(Self)
            .ok_or_else(|| {
                AddressBookError::invalid_input("index").with_reason("must be a positive integer")
            })
    }

    /// Creates an index from a 0-based offset.
    pub fn from_zero_based(zero_based: usize) -> Self {
        Self(zero_based)
    }

    /// Position as shown to the user.
    pub fn one_based(&self) -> usize {
        self.0 + 1
    }

    /// Offset into the underlying list.
    pub fn zero_based(&self) -> usize {
        self.0
    }
}
