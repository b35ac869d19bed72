//! Database operations and SQLite management for contacts and events.
//!
//! This module provides low-level database operations for the address book.
//! It handles SQLite connections and schema management, and provides query
//! interfaces for contacts, events and the displayed list snapshot. The
//! [`crate::model::Model`] implementation for [`Database`] lives in
//! [`model`].

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod contact_queries;
pub mod display_queries;
pub mod event_queries;
pub mod migrations;
pub mod model;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Creates a database that lives only as long as this value.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
