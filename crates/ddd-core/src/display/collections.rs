//! Collection wrapper for the displayed list.

use std::{fmt, ops::Index};

use crate::models::Displayable;

/// Newtype wrapper rendering the displayed list with the 1-based positions
/// users pass to index-based commands.
///
/// # Examples
///
/// ```rust
/// use ddd_core::{display::DisplayedItems, models::Contact};
/// use jiff::Timestamp;
///
/// let contact = Contact {
///     id: 4,
///     name: "Alice Tan".to_string(),
///     phone: None,
///     email: None,
///     address: None,
///     tags: vec![],
///     created_at: Timestamp::now(),
/// };
/// let items = DisplayedItems(vec![contact.into()]);
/// assert_eq!(items.to_string(), "1. **[Contact]** Alice Tan\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayedItems(pub Vec<Displayable>);

impl DisplayedItems {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of items in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the items.
    pub fn iter(&self) -> std::slice::Iter<'_, Displayable> {
        self.0.iter()
    }
}

impl Index<usize> for DisplayedItems {
    type Output = Displayable;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for DisplayedItems {
    type Item = Displayable;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for DisplayedItems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No items found.")
        } else {
            for (position, item) in self.0.iter().enumerate() {
                writeln!(f, "{}. **[{}]** {}", position + 1, item.kind(), item)?;
            }
            Ok(())
        }
    }
}
