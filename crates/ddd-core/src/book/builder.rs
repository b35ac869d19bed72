//! Builder for creating and configuring AddressBook instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::AddressBook;
use crate::{
    db::Database,
    error::{AddressBookError, JoinResultExt, Result},
};

/// Builder for creating and configuring AddressBook instances.
#[derive(Debug, Clone, Default)]
pub struct AddressBookBuilder {
    database_path: Option<PathBuf>,
}

impl AddressBookBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/ddd/ddd.db` or `~/.local/share/ddd/ddd.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured address book.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::FileSystem` if the database directory
    /// cannot be created, `AddressBookError::Database` if database
    /// initialization fails
    pub async fn build(self) -> Result<AddressBook> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| AddressBookError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), AddressBookError>(())
        })
        .await
        .join_context()??;

        debug!("Using database at {}", db_path.display());
        Ok(AddressBook::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("ddd")
            .place_data_file("ddd.db")
            .map_err(|e| AddressBookError::XdgDirectory(e.to_string()))
    }
}
