use ddd_core::AddressBookBuilder;
use tempfile::TempDir;

/// Helper function to create a test address book
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
pub async fn create_test_book() -> (TempDir, ddd_core::AddressBook) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let book = AddressBookBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create address book");
    (temp_dir, book)
}
