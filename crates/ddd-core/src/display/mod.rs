//! Display formatting for domain models and command outcomes.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`])
//! with a compact one-line form used inside feedback messages. Wrapper types
//! add context on top of that:
//!
//! - [`collections`]: the numbered displayed list ([`DisplayedItems`])
//! - [`results`]: create and delete feedback ([`CreateResult`], [`DeleteResult`])
//!
//! # Examples
//!
//! ```rust
//! use ddd_core::{display::DeleteResult, models::Contact};
//! use jiff::Timestamp;
//!
//! let contact = Contact {
//!     id: 1,
//!     name: "Alice Tan".to_string(),
//!     phone: Some("91234567".to_string()),
//!     email: None,
//!     address: None,
//!     tags: vec!["florist".to_string()],
//!     created_at: Timestamp::now(),
//! };
//!
//! let output = DeleteResult::new(contact).to_string();
//! assert_eq!(output, "Deleted Contact: Alice Tan; Phone: 91234567; Tags: [florist]");
//! ```

pub mod collections;
pub mod models;
pub mod results;

pub use collections::DisplayedItems;
pub use results::{CreateResult, DeleteResult};
