//! Command-line argument wrappers and command handling
//!
//! Argument structures carry clap derives and convert into the core
//! parameter types with `From`, keeping clap out of `ddd-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → AddressBook → Command
//! ```
//!
//! [`Cli`] runs the converted parameters against the address book and
//! renders the feedback.

use anyhow::Result;
use clap::{builder::RangedU64ValueParser, Args, Subcommand};
use ddd_core::{
    params::{DeleteItem, FindItems, ListItems},
    AddressBook, CommandResult, KindFilter, NewContact, NewEvent,
};
use jiff::civil::Date;
use log::debug;

use crate::renderer::TerminalRenderer;

/// Flags restricting a listing to one kind of item
#[derive(Args, Clone, Copy, Default)]
#[group(multiple = false)]
pub struct KindArgs {
    /// Only show contacts
    #[arg(long)]
    pub contacts: bool,
    /// Only show events
    #[arg(long)]
    pub events: bool,
}

impl From<KindArgs> for KindFilter {
    fn from(val: KindArgs) -> Self {
        match (val.contacts, val.events) {
            (true, _) => KindFilter::Contacts,
            (_, true) => KindFilter::Events,
            _ => KindFilter::All,
        }
    }
}

/// Add a new contact
///
/// Contact names must be unique, ignoring case.
#[derive(Args)]
pub struct AddContactArgs {
    /// Full name of the contact
    pub name: String,
    #[arg(short, long, help = "Phone number")]
    pub phone: Option<String>,
    #[arg(short, long, help = "Email address")]
    pub email: Option<String>,
    #[arg(short, long, help = "Postal address")]
    pub address: Option<String>,
    #[arg(
        short,
        long = "tag",
        value_delimiter = ',',
        help = "Tags as comma-separated list"
    )]
    pub tags: Vec<String>,
}

impl From<AddContactArgs> for NewContact {
    fn from(val: AddContactArgs) -> Self {
        NewContact {
            name: val.name,
            phone: val.phone,
            email: val.email,
            address: val.address,
            tags: val.tags,
        }
    }
}

#[derive(Subcommand)]
pub enum ContactCommands {
    /// Add a new contact
    #[command(alias = "a")]
    Add(AddContactArgs),
}

/// Add a new event
///
/// Participants are given by contact ID and must already exist.
#[derive(Args)]
pub struct AddEventArgs {
    /// Name of the event
    pub name: String,
    #[arg(long, help = "Date of the event (YYYY-MM-DD)")]
    pub date: Date,
    #[arg(short, long, help = "Optional description of the event")]
    pub description: Option<String>,
    #[arg(
        short,
        long = "contact",
        value_delimiter = ',',
        help = "IDs of participating contacts as comma-separated list"
    )]
    pub contacts: Vec<u64>,
}

impl From<AddEventArgs> for NewEvent {
    fn from(val: AddEventArgs) -> Self {
        NewEvent {
            name: val.name,
            description: val.description,
            date: val.date,
            contact_ids: val.contacts,
        }
    }
}

#[derive(Subcommand)]
pub enum EventCommands {
    /// Add a new event
    #[command(alias = "a")]
    Add(AddEventArgs),
}

/// List contacts and events
///
/// Replaces the numbered list with every contact followed by every event,
/// or only one kind when a flag is given.
#[derive(Args, Default)]
pub struct ListArgs {
    #[command(flatten)]
    pub kind: KindArgs,
}

impl From<ListArgs> for ListItems {
    fn from(val: ListArgs) -> Self {
        ListItems {
            kind: val.kind.into(),
        }
    }
}

/// Find contacts and events by name
///
/// Shows items whose name contains any keyword as a whole word, ignoring
/// case.
#[derive(Args)]
pub struct FindArgs {
    /// Keywords to search for
    #[arg(required = true, num_args = 1..)]
    pub keywords: Vec<String>,
    #[command(flatten)]
    pub kind: KindArgs,
}

impl From<FindArgs> for FindItems {
    fn from(val: FindArgs) -> Self {
        FindItems {
            keywords: val.keywords,
            kind: val.kind.into(),
        }
    }
}

/// Delete a contact or event
///
/// INDEX is the number shown next to the item in the last printed list.
#[derive(Args)]
pub struct DeleteArgs {
    #[arg(
        value_parser = RangedU64ValueParser::<usize>::new().range(1..),
        help = "1-based index of the item in the last displayed list"
    )]
    pub index: usize,
}

impl From<DeleteArgs> for DeleteItem {
    fn from(val: DeleteArgs) -> Self {
        DeleteItem { index: val.index }
    }
}

/// Runs parsed commands against the address book and renders the output.
pub struct Cli {
    book: AddressBook,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(book: AddressBook, renderer: TerminalRenderer) -> Self {
        Self { book, renderer }
    }

    pub async fn handle_contact_command(&self, command: ContactCommands) -> Result<()> {
        match command {
            ContactCommands::Add(args) => {
                let result = self.book.add_contact(args.into()).await?;
                self.show(&result).await
            }
        }
    }

    pub async fn handle_event_command(&self, command: EventCommands) -> Result<()> {
        match command {
            EventCommands::Add(args) => {
                let result = self.book.add_event(args.into()).await?;
                self.show(&result).await
            }
        }
    }

    pub async fn list(&self, params: &ListItems) -> Result<()> {
        let result = self.book.list(params).await?;
        self.show(&result).await
    }

    pub async fn find(&self, params: &FindItems) -> Result<()> {
        let result = self.book.find(params).await?;
        self.show(&result).await
    }

    pub async fn delete(&self, params: &DeleteItem) -> Result<()> {
        let result = self.book.delete(params).await?;
        self.show(&result).await
    }

    async fn show(&self, result: &CommandResult) -> Result<()> {
        debug!("Rendering result, show_list = {}", result.show_list);
        self.renderer.render(&result.to_string());
        if result.show_list {
            let items = self.book.displayed_items().await?;
            self.renderer.render(&format!("\n{items}"));
        }
        Ok(())
    }
}
