//! Persistence of the displayed list snapshot.
//!
//! The snapshot stores `(position, kind, item_id)` rows so that a command run
//! in a later process resolves indices against the list the user last saw.

use rusqlite::{params, Connection, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    model::DisplayedRef,
    models::ItemKind,
};

const CLEAR_DISPLAYED_SQL: &str = "DELETE FROM displayed_items";
const INSERT_DISPLAYED_SQL: &str =
    "INSERT INTO displayed_items (position, kind, item_id) VALUES (?1, ?2, ?3)";
const SELECT_DISPLAYED_SQL: &str =
    "SELECT kind, item_id FROM displayed_items ORDER BY position";
const COUNT_DISPLAYED_SQL: &str = "SELECT COUNT(*) FROM displayed_items";
const SELECT_DISPLAYED_AT_SQL: &str =
    "SELECT kind, item_id FROM displayed_items ORDER BY position LIMIT 1 OFFSET ?1";
const DELETE_DISPLAYED_SQL: &str = "DELETE FROM displayed_items WHERE kind = ?1 AND item_id = ?2";

/// A snapshot row as stored, before the kind is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedRow {
    pub kind: String,
    pub item_id: u64,
}

/// Replaces the whole snapshot with `entries`, in order.
pub(super) fn replace_displayed(conn: &Connection, entries: &[DisplayedRef]) -> Result<()> {
    conn.execute(CLEAR_DISPLAYED_SQL, [])
        .db_context("Failed to clear displayed list")?;

    let mut stmt = conn
        .prepare_cached(INSERT_DISPLAYED_SQL)
        .db_context("Failed to prepare displayed list insert")?;
    for (position, entry) in entries.iter().enumerate() {
        stmt.execute(params![
            position as i64,
            entry.kind.as_str(),
            entry.id as i64
        ])
        .db_context("Failed to store displayed item")?;
    }
    Ok(())
}

/// Reads the snapshot in display order.
pub(super) fn load_displayed(conn: &Connection) -> Result<Vec<DisplayedRow>> {
    let mut stmt = conn
        .prepare(SELECT_DISPLAYED_SQL)
        .db_context("Failed to prepare displayed list query")?;

    let rows = stmt
        .query_map([], |row| {
            Ok(DisplayedRow {
                kind: row.get(0)?,
                item_id: row.get::<_, i64>(1)? as u64,
            })
        })
        .db_context("Failed to query displayed list")?
        .collect::<rusqlite::Result<Vec<_>>>()
        .db_context("Failed to read displayed list row")?;
    Ok(rows)
}

/// Number of rows in the snapshot.
pub(super) fn count_displayed(conn: &Connection) -> Result<usize> {
    let count: i64 = conn
        .query_row(COUNT_DISPLAYED_SQL, [], |row| row.get(0))
        .db_context("Failed to count displayed list")?;
    Ok(count as usize)
}

/// The row at a 0-based offset in display order.
///
/// Offsets rather than stored positions are used because pruning leaves
/// gaps in the position column.
pub(super) fn load_displayed_at(conn: &Connection, offset: usize) -> Result<Option<DisplayedRow>> {
    conn.query_row(SELECT_DISPLAYED_AT_SQL, params![offset as i64], |row| {
        Ok(DisplayedRow {
            kind: row.get(0)?,
            item_id: row.get::<_, i64>(1)? as u64,
        })
    })
    .optional()
    .db_context("Failed to load displayed item")
}

/// Drops the snapshot entry of a deleted item. Positions of the remaining
/// rows keep their relative order.
pub(super) fn forget_displayed(conn: &Connection, kind: ItemKind, id: u64) -> Result<()> {
    conn.execute(DELETE_DISPLAYED_SQL, params![kind.as_str(), id as i64])
        .db_context("Failed to prune displayed list")?;
    Ok(())
}

impl super::Database {
    /// Raw snapshot rows in display order.
    pub fn displayed_rows(&self) -> Result<Vec<DisplayedRow>> {
        load_displayed(&self.connection)
    }
}
