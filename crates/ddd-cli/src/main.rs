//! DDD CLI Application
//!
//! Command-line interface for the DDD contact and event manager.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use ddd_core::{params::ListItems, AddressBookBuilder};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let book = AddressBookBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize address book")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(book, renderer);

    info!("DDD started");

    match command {
        Some(Contact { command }) => cli.handle_contact_command(command).await,
        Some(Event { command }) => cli.handle_event_command(command).await,
        Some(List(args)) => cli.list(&args.into()).await,
        Some(Find(args)) => cli.find(&args.into()).await,
        Some(Delete(args)) => cli.delete(&args.into()).await,
        None => cli.list(&ListItems::default()).await,
    }
}
