//! Address book operations dispatching commands to the database.

use log::debug;
use tokio::task;

use super::AddressBook;
use crate::{
    commands::{
        AddContactCommand, AddEventCommand, Command, CommandResult, DeleteCommand, FindCommand,
        ListCommand,
    },
    db::Database,
    display::DisplayedItems,
    error::{JoinResultExt, Result},
    model::Model,
    models::{Contact, Event, Index, NewContact, NewEvent},
    params::{DeleteItem, FindItems, ListItems},
};

impl AddressBook {
    /// Runs one command against a fresh database connection.
    pub async fn execute<C>(&self, command: C) -> Result<CommandResult>
    where
        C: Command + Send + 'static,
    {
        let db_path = self.db_path.clone();
        debug!("Executing {command:?}");

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            command.execute(&mut db)
        })
        .await
        .join_context()?
    }

    /// Adds a contact.
    pub async fn add_contact(&self, contact: NewContact) -> Result<CommandResult> {
        self.execute(AddContactCommand::new(contact)).await
    }

    /// Adds an event.
    pub async fn add_event(&self, event: NewEvent) -> Result<CommandResult> {
        self.execute(AddEventCommand::new(event)).await
    }

    /// Shows every item of the requested kind.
    pub async fn list(&self, params: &ListItems) -> Result<CommandResult> {
        self.execute(ListCommand::new(params.kind)).await
    }

    /// Narrows the displayed list to items matching keywords.
    pub async fn find(&self, params: &FindItems) -> Result<CommandResult> {
        self.execute(FindCommand::new(params.keywords.clone(), params.kind))
            .await
    }

    /// Deletes the item at a 1-based position of the last displayed list.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::InvalidInput` for index 0 and
    /// `AddressBookError::DisplayedIndexTooLarge` past the end of the list.
    pub async fn delete(&self, params: &DeleteItem) -> Result<CommandResult> {
        let index = Index::from_one_based(params.index)?;
        self.execute(DeleteCommand::new(index)).await
    }

    /// Items currently displayed, numbered as the user sees them.
    pub async fn displayed_items(&self) -> Result<DisplayedItems> {
        self.query(|db| db.displayed_list().map(DisplayedItems))
            .await
    }

    /// All stored contacts.
    pub async fn contacts(&self) -> Result<Vec<Contact>> {
        self.query(|db| db.contacts()).await
    }

    /// All stored events.
    pub async fn events(&self) -> Result<Vec<Event>> {
        self.query(|db| db.events()).await
    }

    async fn query<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            f(&db)
        })
        .await
        .join_context()?
    }
}
