//! Data models for contacts and events.
//!
//! This module contains the core domain models of the address book. Display
//! implementations for these models live in [`crate::display::models`] to
//! keep data structures apart from presentation logic.
//!
//! # Displayed items
//!
//! Every list or find operation produces an ordered list of [`Displayable`]
//! items. The user refers to those items by a 1-based [`Index`], which
//! commands such as delete resolve against the list that was last shown.
//!
//! # Examples
//!
//! ```rust
//! use ddd_core::models::{Contact, Displayable, Index, ItemKind};
//! use jiff::Timestamp;
//!
//! let contact = Contact {
//!     id: 1,
//!     name: "Alice Tan".to_string(),
//!     phone: Some("91234567".to_string()),
//! #   email: None,
//! #   address: None,
//! #   tags: vec![],
//! #   created_at: Timestamp::now(),
//! };
//! let item = Displayable::from(contact);
//! assert_eq!(item.kind(), ItemKind::Contact);
//!
//! let index = Index::from_one_based(1).unwrap();
//! assert_eq!(index.zero_based(), 0);
//! ```

pub mod contact;
pub mod displayable;
pub mod event;
pub mod filters;
pub mod index;
pub mod requests;


pub use contact::Contact;
pub use displayable::{Displayable, ItemKind};
pub use event::Event;
pub use filters::{DisplayFilter, KindFilter};
pub use index::Index;
pub use requests::{NewContact, NewEvent};
