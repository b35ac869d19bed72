//! Event CRUD operations and queries.

use jiff::{civil::Date, Timestamp};
use rusqlite::{params, types::Type, Connection, OptionalExtension, Row};

use crate::{
    error::{AddressBookError, DatabaseResultExt, Result},
    models::{Event, NewEvent},
};

const INSERT_EVENT_SQL: &str =
    "INSERT INTO events (name, description, date, created_at) VALUES (?1, ?2, ?3, ?4)";
const INSERT_EVENT_CONTACT_SQL: &str =
    "INSERT INTO event_contacts (event_id, contact_id, position) VALUES (?1, ?2, ?3)";
const SELECT_EVENT_SQL: &str =
    "SELECT id, name, description, date, created_at FROM events WHERE id = ?1";
const SELECT_EVENTS_SQL: &str =
    "SELECT id, name, description, date, created_at FROM events ORDER BY id";
const SELECT_EVENT_CONTACTS_SQL: &str =
    "SELECT contact_id FROM event_contacts WHERE event_id = ?1 ORDER BY position";
const DELETE_EVENT_SQL: &str = "DELETE FROM events WHERE id = ?1";

/// Maps a row selected with the event column list. Participants are loaded
/// separately.
fn event_from_row(row: &Row<'_>) -> rusqlite::Result<Event> {
    Ok(Event {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        description: row.get(2)?,
        date: row.get::<_, String>(3)?.parse::<Date>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
        })?,
        contact_ids: Vec::new(),
        created_at: row.get::<_, String>(4)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
        })?,
    })
}

fn load_contact_ids(conn: &Connection, event_id: u64) -> Result<Vec<u64>> {
    let mut stmt = conn
        .prepare_cached(SELECT_EVENT_CONTACTS_SQL)
        .db_context("Failed to prepare participant query")?;

    let ids = stmt
        .query_map(params![event_id as i64], |row| {
            row.get::<_, i64>(0).map(|id| id as u64)
        })
        .db_context("Failed to query participants")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("Failed to read participant row")?;
    Ok(ids)
}

/// Inserts an event and its participant links. Callers run this inside a
/// transaction so a missing contact leaves nothing behind.
pub(super) fn insert_event(conn: &Connection, event: &NewEvent) -> Result<Event> {
    let now = Timestamp::now();

    conn.execute(
        INSERT_EVENT_SQL,
        params![
            event.name,
            event.description,
            event.date.to_string(),
            now.to_string()
        ],
    )
    .db_context("Failed to insert event")?;
    let id = conn.last_insert_rowid() as u64;

    for (position, contact_id) in event.contact_ids.iter().enumerate() {
        conn.execute(
            INSERT_EVENT_CONTACT_SQL,
            params![id as i64, *contact_id as i64, position as i64],
        )
        .map_err(|e| match e {
            rusqlite::Error::SqliteFailure(ref err, _)
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                AddressBookError::ContactNotFound { id: *contact_id }
            }
            other => AddressBookError::database("Failed to link event contact").with_source(other),
        })?;
    }

    Ok(Event {
        id,
        name: event.name.clone(),
        description: event.description.clone(),
        date: event.date,
        contact_ids: event.contact_ids.clone(),
        created_at: now,
    })
}

/// Loads every event ordered by ID, with participants.
pub(super) fn list_events(conn: &Connection) -> Result<Vec<Event>> {
    let mut stmt = conn
        .prepare(SELECT_EVENTS_SQL)
        .db_context("Failed to prepare event query")?;

    let mut events = stmt
        .query_map([], event_from_row)
        .db_context("Failed to query events")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("Failed to read event row")?;

    for event in &mut events {
        event.contact_ids = load_contact_ids(conn, event.id)?;
    }
    Ok(events)
}

/// Loads one event with participants.
pub(super) fn get_event(conn: &Connection, id: u64) -> Result<Option<Event>> {
    let mut event = conn
        .query_row(SELECT_EVENT_SQL, params![id as i64], event_from_row)
        .optional()
        .db_context("Failed to query event")?;

    if let Some(ref mut event) = event {
        event.contact_ids = load_contact_ids(conn, event.id)?;
    }
    Ok(event)
}

/// Deletes one event; participant links cascade.
pub(super) fn delete_event(conn: &Connection, id: u64) -> Result<()> {
    let deleted = conn
        .execute(DELETE_EVENT_SQL, params![id as i64])
        .db_context("Failed to delete event")?;

    if deleted == 0 {
        return Err(AddressBookError::EventNotFound { id });
    }
    Ok(())
}

impl super::Database {
    /// Retrieves an event by its ID.
    pub fn get_event(&self, id: u64) -> Result<Option<Event>> {
        get_event(&self.connection, id)
    }

    /// Lists all events ordered by ID.
    pub fn list_events(&self) -> Result<Vec<Event>> {
        list_events(&self.connection)
    }
}
