//! Error types for the address book library.

use std::path::PathBuf;

use thiserror::Error;

/// Message shown when a displayed index points past the end of the list.
pub const MESSAGE_DISPLAYED_INDEX_TOO_LARGE: &str = "The displayed index provided is too large";

/// Message shown when the displayed list holds an entry that is neither a
/// contact nor an event.
pub const MESSAGE_UNKNOWN_ITEM: &str = "Unknown item displayed in list.";

/// Comprehensive error type for all address book operations.
#[derive(Error, Debug)]
pub enum AddressBookError {
    /// The 1-based index does not resolve to an item in the displayed list
    #[error("{}", MESSAGE_DISPLAYED_INDEX_TOO_LARGE)]
    DisplayedIndexTooLarge,
    /// The displayed list contains an entry of an unrecognised kind
    #[error("{}", MESSAGE_UNKNOWN_ITEM)]
    UnknownItem,
    /// Contact not found for the given ID
    #[error("Contact with ID {id} not found")]
    ContactNotFound { id: u64 },
    /// Event not found for the given ID
    #[error("Event with ID {id} not found")]
    EventNotFound { id: u64 },
    /// A contact with the same name already exists
    #[error("A contact named '{name}' already exists")]
    DuplicateContact { name: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> AddressBookError {
        AddressBookError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> AddressBookError {
        AddressBookError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl AddressBookError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether the error was caused by what the user typed rather than by
    /// storage or environment problems.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::DisplayedIndexTooLarge
                | Self::ContactNotFound { .. }
                | Self::EventNotFound { .. }
                | Self::DuplicateContact { .. }
                | Self::InvalidInput { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| AddressBookError::database(message).with_source(e))
    }
}

/// Extension trait for joining blocking tasks spawned on the runtime.
pub trait JoinResultExt<T> {
    /// Map a task join failure into a configuration error.
    fn join_context(self) -> Result<T>;
}

impl<T> JoinResultExt<T> for std::result::Result<T, tokio::task::JoinError> {
    fn join_context(self) -> Result<T> {
        self.map_err(|e| AddressBookError::Configuration {
            message: format!("Task join error: {e}"),
        })
    }
}

/// Result type alias for address book operations
pub type Result<T> = std::result::Result<T, AddressBookError>;
