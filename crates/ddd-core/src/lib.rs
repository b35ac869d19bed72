//! Core library for the DDD contact and event manager.
//!
//! This crate provides the business logic for managing contacts and events:
//! data models, the [`model::Model`] abstraction with in-memory and SQLite
//! implementations, the commands users run against it, and display
//! formatting for their results.
//!
//! # Displayed list
//!
//! Listing or finding items produces a numbered displayed list. Index-based
//! commands such as delete resolve the 1-based number the user saw against
//! that list. The SQLite model stores the list as a snapshot, so a later
//! process sees the same numbering.
//!
//! # Quick Start
//!
//! ```rust
//! use ddd_core::{params::{DeleteItem, ListItems}, AddressBookBuilder, NewContact};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let book = AddressBookBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! book.add_contact(NewContact {
//!     name: "Alice Tan".to_string(),
//!     phone: Some("91234567".to_string()),
//!     ..Default::default()
//! })
//! .await?;
//!
//! book.list(&ListItems::default()).await?;
//! println!("{}", book.displayed_items().await?);
//!
//! let result = book.delete(&DeleteItem { index: 1 }).await?;
//! println!("{result}");
//! # Ok(())
//! # }
//! ```

pub mod book;
pub mod commands;
pub mod db;
pub mod display;
pub mod error;
pub mod model;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use book::{AddressBook, AddressBookBuilder};
pub use commands::{Command, CommandResult, DeleteCommand};
pub use db::Database;
pub use display::{CreateResult, DeleteResult, DisplayedItems};
pub use error::{AddressBookError, Result};
pub use model::{InMemoryModel, Model};
pub use models::{
    Contact, DisplayFilter, Displayable, Event, Index, ItemKind, KindFilter, NewContact, NewEvent,
};
pub use params::{DeleteItem, FindItems, ListItems};
