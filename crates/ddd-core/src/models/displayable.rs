//! Items that can appear in the displayed list.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Contact, Event};

/// An entry of the displayed list: either a contact or an event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Displayable {
    Contact(Contact),
    Event(Event),
}

impl Displayable {
    /// Kind tag of the wrapped item.
    pub fn kind(&self) -> ItemKind {
        match self {
            Displayable::Contact(_) => ItemKind::Contact,
            Displayable::Event(_) => ItemKind::Event,
        }
    }

    /// Storage ID of the wrapped item.
    pub fn id(&self) -> u64 {
        match self {
            Displayable::Contact(contact) => contact.id,
            Displayable::Event(event) => event.id,
        }
    }

    /// Name shown for the item in lists.
    pub fn name(&self) -> &str {
        match self {
            Displayable::Contact(contact) => &contact.name,
            Displayable::Event(event) => &event.name,
        }
    }
}

impl From<Contact> for Displayable {
    fn from(contact: Contact) -> Self {
        Displayable::Contact(contact)
    }
}

impl From<Event> for Displayable {
    fn from(event: Event) -> Self {
        Displayable::Event(event)
    }
}

/// Type-safe enumeration of displayable item kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Contact,
    Event,
}

impl ItemKind {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Contact => "contact",
            ItemKind::Event => "event",
        }
    }
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "contact" => Ok(ItemKind::Contact),
            "event" => Ok(ItemKind::Event),
            _ => Err(format!("Invalid item kind: {s}")),
        }
    }
}
