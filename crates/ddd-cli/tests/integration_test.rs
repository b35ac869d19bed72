//! Integration tests comparing CLI output with the core Display
//! implementations
//!
//! Items created through the CLI are read back through `ddd-core` and
//! formatted directly; the CLI must print exactly that text.

use std::process::Command;

use ddd_core::{AddressBook, AddressBookBuilder, DeleteResult, Displayable, DisplayedItems};
use tempfile::TempDir;

/// Helper function to create a test address book with temporary database
async fn create_test_book() -> (AddressBook, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");

    let book = AddressBookBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to create address book");

    (book, temp_dir)
}

/// Run a CLI command and capture its output
fn run_cli_command(db_path: &str, args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ddd"));
    cmd.arg("--no-color").arg("--database-file").arg(db_path);

    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run CLI command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

#[tokio::test]
async fn test_list_display_consistency() {
    let (book, temp_dir) = create_test_book().await;
    let db_path = temp_dir.path().join("test.db");
    let db_str = db_path.to_str().unwrap();

    run_cli_command(db_str, &["contact", "add", "Alice Tan", "--phone", "91234567"]);
    run_cli_command(
        db_str,
        &["event", "add", "Banquet", "--date", "2024-12-01", "--contact", "1"],
    );
    let cli_output = run_cli_command(db_str, &["list"]);

    let items: DisplayedItems = book.displayed_items().await.expect("Failed to load list");
    let expected = items.to_string().replace("**", "");

    assert!(
        cli_output.contains(&expected),
        "CLI output:\n{cli_output}\nexpected to contain:\n{expected}"
    );
}

#[tokio::test]
async fn test_delete_display_consistency() {
    let (book, temp_dir) = create_test_book().await;
    let db_path = temp_dir.path().join("test.db");
    let db_str = db_path.to_str().unwrap();

    run_cli_command(db_str, &["contact", "add", "Alice Tan", "--tag", "vip"]);
    run_cli_command(db_str, &["contact", "add", "Bob Lee"]);

    let shown = book.displayed_items().await.expect("Failed to load list");
    let expected = match &shown[1] {
        Displayable::Contact(contact) => DeleteResult::new(contact.clone()).to_string(),
        Displayable::Event(event) => DeleteResult::new(event.clone()).to_string(),
    };

    let cli_output = run_cli_command(db_str, &["delete", "2"]);
    assert_eq!(cli_output.trim_end(), expected);

    let remaining = book.contacts().await.expect("Failed to list contacts");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "Alice Tan");
}
