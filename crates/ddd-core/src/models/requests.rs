//! Validated input for creating contacts and events.

use jiff::civil::Date;

use crate::error::{AddressBookError, Result};

/// Fields of a contact that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewContact {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub tags: Vec<String>,
}

impl NewContact {
    /// Trims text fields, drops blank optionals and tags, and checks that a
    /// name is present.
    pub fn validate(mut self) -> Result<Self> {
        self.name = self.name.trim().to_string();
        if self.name.is_empty() {
            return Err(AddressBookError::invalid_input("name").with_reason("must not be empty"));
        }
        self.phone = non_blank(self.phone);
        self.email = non_blank(self.email);
        self.address = non_blank(self.address);
        self.tags = self
            .tags
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        retain_first(&mut self.tags);

        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err(AddressBookError::invalid_input("email")
                    .with_reason(format!("'{email}' is not an email address")));
            }
        }
        Ok(self)
    }
}

/// Fields of an event that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub name: String,
    pub description: Option<String>,
    pub date: Date,
    pub contact_ids: Vec<u64>,
}

impl NewEvent {
    /// Trims text fields, removes duplicate participants, and checks that a
    /// name is present. Participant existence is checked by the model.
    pub fn validate(mut self) -> Result<Self> {
        self.name = self.name.trim().to_string();
        if self.name.is_empty() {
            return Err(AddressBookError::invalid_input("name").with_reason("must not be empty"));
        }
        self.description = non_blank(self.description);
        retain_first(&mut self.contact_ids);
        Ok(self)
    }
}

/// Keeps the first occurrence of each value, preserving order.
fn retain_first<T: PartialEq + Clone>(values: &mut Vec<T>) {
    let mut seen: Vec<T> = Vec::with_capacity(values.len());
    values.retain(|value| {
        if seen.contains(value) {
            false
        } else {
            seen.push(value.clone());
            true
        }
    });
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
