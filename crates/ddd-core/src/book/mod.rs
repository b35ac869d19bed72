//! High-level address book API.
//!
//! [`AddressBook`] is the entry point interfaces use. Every call opens the
//! SQLite database on a blocking task, runs exactly one
//! [`crate::commands::Command`] against it and returns the result, so the
//! async runtime never blocks on disk I/O and commands never overlap.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   AddressBook   │    │    Commands     │    │    Database     │
//! │ (ops, builder)  │───▶│ (add, list,     │───▶│  (impl Model)   │
//! │                 │    │  find, delete)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use ddd_core::{params::DeleteItem, AddressBookBuilder, NewContact};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let book = AddressBookBuilder::new()
//!     .with_database_path(Some("contacts.db"))
//!     .build()
//!     .await?;
//!
//! book.add_contact(NewContact {
//!     name: "Alice Tan".to_string(),
//!     ..Default::default()
//! })
//! .await?;
//!
//! let result = book.delete(&DeleteItem { index: 1 }).await?;
//! println!("{result}");
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod builder;
pub mod ops;


pub use builder::AddressBookBuilder;

/// Main interface for managing contacts and events.
pub struct AddressBook {
    pub(crate) db_path: PathBuf,
}

impl AddressBook {
    /// Creates an address book stored at the given database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Location of the database file.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }
}
