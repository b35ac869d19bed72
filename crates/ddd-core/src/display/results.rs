//! Result wrapper types for displaying command outcomes.
//!
//! These wrappers prefix the one-line model display with the action that was
//! performed, giving the feedback text returned by commands.

use std::fmt;

use crate::models::{Contact, Event};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use ddd_core::{display::CreateResult, models::Event};
/// use jiff::{civil::date, Timestamp};
///
/// let event = Event {
///     id: 1,
///     name: "Banquet".to_string(),
///     description: None,
///     date: date(2024, 12, 1),
///     contact_ids: vec![],
///     created_at: Timestamp::now(),
/// };
///
/// assert_eq!(
///     CreateResult::new(event).to_string(),
///     "New event added: Banquet; Date: 2024-12-01"
/// );
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Contact> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "New contact added: {}", self.resource)
    }
}

impl fmt::Display for CreateResult<Event> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "New event added: {}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Contact> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deleted Contact: {}", self.resource)
    }
}

impl fmt::Display for DeleteResult<Event> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deleted Event: {}", self.resource)
    }
}
