//! Parameter structures for address book operations
//!
//! These structures carry user input from an interface (the CLI today) into
//! [`crate::AddressBook`] without framework-specific derives. Interface
//! layers define their own argument types and convert into these with
//! `From` implementations:
//!
//! ```text
//! CLI Args (clap) → Core Params → AddressBook → Command
//! ```
//!
//! Contacts and events are created from [`crate::models::NewContact`] and
//! [`crate::models::NewEvent`] directly.

use crate::models::KindFilter;

/// Parameters for showing every item of a kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListItems {
    /// Which kinds of items to show
    pub kind: KindFilter,
}

/// Parameters for narrowing the displayed list by keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindItems {
    /// Words to look for in item names
    pub keywords: Vec<String>,

    /// Which kinds of items to search
    pub kind: KindFilter,
}

/// Parameters for deleting a displayed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteItem {
    /// 1-based position in the last displayed list
    pub index: usize,
}
