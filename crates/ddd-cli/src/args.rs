use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ContactCommands, DeleteArgs, EventCommands, FindArgs, ListArgs};

/// Command-line contact and event manager
///
/// DDD keeps contacts and the events they take part in. Listing or finding
/// items prints a numbered list; index-based commands such as `delete` refer
/// to the numbers of the list printed last.
#[derive(Parser)]
#[command(version, about, name = "ddd")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/ddd/ddd.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the DDD CLI
///
/// - `contact` / `event`: add new items
/// - `list` / `find`: choose what the numbered list shows
/// - `delete`: remove an item by its number in that list
#[derive(Subcommand)]
pub enum Commands {
    /// Manage contacts
    #[command(alias = "c")]
    Contact {
        #[command(subcommand)]
        command: ContactCommands,
    },
    /// Manage events
    #[command(alias = "e")]
    Event {
        #[command(subcommand)]
        command: EventCommands,
    },
    /// List contacts and events
    #[command(aliases = ["l", "ls"])]
    List(ListArgs),
    /// Find contacts and events by name
    #[command(alias = "f")]
    Find(FindArgs),
    /// Delete a contact or event by its displayed index
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
}
