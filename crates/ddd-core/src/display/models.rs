//! Display implementations for domain models.
//!
//! Models render on a single line so they can be embedded in feedback such
//! as `Deleted Contact: ...`. Absent optional fields are left out.

use std::fmt;

use crate::models::{Contact, Displayable, Event, ItemKind};

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Contact => write!(f, "Contact"),
            ItemKind::Event => write!(f, "Event"),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(phone) = &self.phone {
            write!(f, "; Phone: {phone}")?;
        }
        if let Some(email) = &self.email {
            write!(f, "; Email: {email}")?;
        }
        if let Some(address) = &self.address {
            write!(f, "; Address: {address}")?;
        }
        if !self.tags.is_empty() {
            write!(f, "; Tags: ")?;
            for tag in &self.tags {
                write!(f, "[{tag}]")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; Date: {}", self.name, self.date)?;
        if let Some(desc) = &self.description {
            write!(f, "; Description: {desc}")?;
        }
        if !self.contact_ids.is_empty() {
            let ids: Vec<String> = self.contact_ids.iter().map(|id| format!("#{id}")).collect();
            write!(f, "; Contacts: {}", ids.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for Displayable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Displayable::Contact(contact) => write!(f, "{contact}"),
            Displayable::Event(event) => write!(f, "{event}"),
        }
    }
}
