//! Event model definition.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

/// A dated event, optionally linked to participating contacts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    /// Unique identifier for the event
    pub id: u64,

    /// Name of the event
    pub name: String,

    /// Detailed multi-line description
    pub description: Option<String>,

    /// Day on which the event takes place
    pub date: Date,

    /// IDs of the contacts taking part, in insertion order
    #[serde(default)]
    pub contact_ids: Vec<u64>,

    /// Timestamp when the event was created (UTC)
    pub created_at: Timestamp,
}

impl Event {
    /// Whether the given contact takes part in this event.
    pub fn involves(&self, contact_id: u64) -> bool {
        self.contact_ids.contains(&contact_id)
    }
}
