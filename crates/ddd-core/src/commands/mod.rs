//! Commands executed against a [`Model`].
//!
//! Each command validates its input, performs at most one mutation on the
//! model and returns a [`CommandResult`] with feedback for the user. All
//! validation happens before the mutating call, so a failed command leaves
//! the model untouched.
//!
//! ```text
//! Interface → Command::execute(&mut dyn Model) → CommandResult
//! ```
//!
//! # Examples
//!
//! ```rust
//! use ddd_core::{
//!     commands::{AddContactCommand, Command, DeleteCommand},
//!     model::{InMemoryModel, Model},
//!     models::{Index, NewContact},
//! };
//!
//! let mut model = InMemoryModel::new();
//! AddContactCommand::new(NewContact {
//!     name: "Alice Tan".to_string(),
//!     ..Default::default()
//! })
//! .execute(&mut model)
//! .unwrap();
//!
//! let result = DeleteCommand::new(Index::from_one_based(1).unwrap())
//!     .execute(&mut model)
//!     .unwrap();
//! assert!(result.feedback.starts_with("Deleted Contact: Alice Tan"));
//! assert!(model.contacts().unwrap().is_empty());
//! ```

use std::fmt;

use crate::{error::Result, model::Model};

pub mod add;
pub mod delete;
pub mod find;
pub mod list;

pub use add::{AddContactCommand, AddEventCommand};
pub use delete::DeleteCommand;
pub use find::FindCommand;
pub use list::ListCommand;

/// An operation the user can run against the model.
pub trait Command: fmt::Debug {
    /// Runs the command, returning feedback for the user.
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult>;
}

/// Outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Human-readable feedback
    pub feedback: String,

    /// Whether the interface should print the displayed list after the
    /// feedback
    pub show_list: bool,
}

impl CommandResult {
    /// Result carrying only feedback text.
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_list: false,
        }
    }

    /// Result asking the interface to print the refreshed displayed list.
    pub fn with_list(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_list: true,
        }
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.feedback)
    }
}
