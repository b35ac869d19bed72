//! Contact model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A person stored in the address book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    /// Unique identifier for the contact
    pub id: u64,

    /// Full name, unique across contacts (case-insensitive)
    pub name: String,

    /// Phone number
    pub phone: Option<String>,

    /// Email address
    pub email: Option<String>,

    /// Postal address
    pub address: Option<String>,

    /// Free-form labels
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Timestamp when the contact was created (UTC)
    pub created_at: Timestamp,
}

impl Contact {
    /// Whether this contact has the given name, ignoring ASCII case.
    ///
    /// Folding is ASCII-only to agree with the `NOCASE` collation that
    /// enforces unique names in SQLite.
    pub fn is_same_contact(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}
