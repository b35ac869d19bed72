//! Contact CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, Connection, OptionalExtension, Row};

use crate::{
    error::{AddressBookError, DatabaseResultExt, Result},
    models::{Contact, NewContact},
};

const INSERT_CONTACT_SQL: &str = "INSERT INTO contacts (name, phone, email, address, tags, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_CONTACT_SQL: &str =
    "SELECT id, name, phone, email, address, tags, created_at FROM contacts WHERE id = ?1";
const SELECT_CONTACTS_SQL: &str =
    "SELECT id, name, phone, email, address, tags, created_at FROM contacts ORDER BY id";
const DELETE_CONTACT_SQL: &str = "DELETE FROM contacts WHERE id = ?1";

/// Maps a row selected with the contact column list.
fn contact_from_row(row: &Row<'_>) -> rusqlite::Result<Contact> {
    let tags_json: String = row.get(5)?;
    let tags: Vec<String> = serde_json::from_str(&tags_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?;

    Ok(Contact {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        phone: row.get(2)?,
        email: row.get(3)?,
        address: row.get(4)?,
        tags,
        created_at: row.get::<_, String>(6)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
        })?,
    })
}

/// Inserts a contact on the given connection or transaction.
pub(super) fn insert_contact(conn: &Connection, contact: &NewContact) -> Result<Contact> {
    let now = Timestamp::now();
    let tags_json = serde_json::to_string(&contact.tags)?;

    conn.execute(
        INSERT_CONTACT_SQL,
        params![
            contact.name,
            contact.phone,
            contact.email,
            contact.address,
            tags_json,
            now.to_string()
        ],
    )
    .db_context("Failed to insert contact")?;

    Ok(Contact {
        id: conn.last_insert_rowid() as u64,
        name: contact.name.clone(),
        phone: contact.phone.clone(),
        email: contact.email.clone(),
        address: contact.address.clone(),
        tags: contact.tags.clone(),
        created_at: now,
    })
}

/// Loads every contact ordered by ID.
pub(super) fn list_contacts(conn: &Connection) -> Result<Vec<Contact>> {
    let mut stmt = conn
        .prepare(SELECT_CONTACTS_SQL)
        .db_context("Failed to prepare contact query")?;

    let contacts = stmt
        .query_map([], contact_from_row)
        .db_context("Failed to query contacts")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("Failed to read contact row")?;
    Ok(contacts)
}

/// Loads one contact.
pub(super) fn get_contact(conn: &Connection, id: u64) -> Result<Option<Contact>> {
    conn.query_row(SELECT_CONTACT_SQL, params![id as i64], contact_from_row)
        .optional()
        .db_context("Failed to query contact")
}

/// Deletes one contact; participation rows cascade.
pub(super) fn delete_contact(conn: &Connection, id: u64) -> Result<()> {
    let deleted = conn
        .execute(DELETE_CONTACT_SQL, params![id as i64])
        .db_context("Failed to delete contact")?;

    if deleted == 0 {
        return Err(AddressBookError::ContactNotFound { id });
    }
    Ok(())
}

impl super::Database {
    /// Retrieves a contact by its ID.
    pub fn get_contact(&self, id: u64) -> Result<Option<Contact>> {
        get_contact(&self.connection, id)
    }

    /// Lists all contacts ordered by ID.
    pub fn list_contacts(&self) -> Result<Vec<Contact>> {
        list_contacts(&self.connection)
    }
}
