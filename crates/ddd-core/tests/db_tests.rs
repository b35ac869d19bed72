use ddd_core::{
    commands::{Command, DeleteCommand, ListCommand},
    AddressBookError, Database, DisplayFilter, Index, KindFilter, Model, NewContact, NewEvent,
};
use jiff::civil::date;
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn new_contact(name: &str) -> NewContact {
    NewContact {
        name: name.to_string(),
        phone: Some("91234567".to_string()),
        email: Some(format!("{}@example.com", name.to_lowercase())),
        address: None,
        tags: vec!["guest".to_string()],
    }
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();

    assert!(temp_file.path().exists());
    assert!(db.contacts().expect("Failed to list contacts").is_empty());
    assert!(db.displayed_list().expect("Failed to load list").is_empty());
}

#[test]
fn test_contact_round_trip_through_storage() {
    let (_temp_file, mut db) = create_test_db();

    let created = db
        .add_contact(new_contact("Alice"))
        .expect("Failed to add contact");

    let stored = db
        .get_contact(created.id)
        .expect("Failed to get contact")
        .expect("Contact should exist");
    assert_eq!(stored.name, "Alice");
    assert_eq!(stored.email.as_deref(), Some("alice@example.com"));
    assert_eq!(stored.tags, vec!["guest".to_string()]);
}

#[test]
fn test_event_participants_preserve_order() {
    let (_temp_file, mut db) = create_test_db();
    let alice = db.add_contact(new_contact("Alice")).unwrap();
    let bob = db.add_contact(new_contact("Bob")).unwrap();

    let event = db
        .add_event(NewEvent {
            name: "Rehearsal".to_string(),
            description: Some("Run-through".to_string()),
            date: date(2024, 4, 13),
            contact_ids: vec![bob.id, alice.id],
        })
        .expect("Failed to add event");

    let stored = db.get_event(event.id).unwrap().expect("Event should exist");
    assert_eq!(stored.contact_ids, vec![bob.id, alice.id]);
    assert_eq!(stored.date, date(2024, 4, 13));
}

#[test]
fn test_displayed_snapshot_persists_across_connections() {
    let temp_file = NamedTempFile::new().unwrap();
    {
        let mut db = Database::new(temp_file.path()).unwrap();
        db.add_contact(new_contact("Alice")).unwrap();
        db.add_contact(new_contact("Bob")).unwrap();
        db.update_displayed_list(&DisplayFilter::with_keywords(
            KindFilter::Contacts,
            vec!["bob".to_string()],
        ))
        .unwrap();
    }

    let mut db = Database::new(temp_file.path()).unwrap();
    let rows = db.displayed_rows().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].kind, "contact");

    let result = DeleteCommand::new(Index::from_one_based(1).unwrap())
        .execute(&mut db)
        .unwrap();
    assert!(result.feedback.starts_with("Deleted Contact: Bob"));
    assert_eq!(db.contacts().unwrap().len(), 1);
}

#[test]
fn test_delete_past_end_does_not_mutate() {
    let (_temp_file, mut db) = create_test_db();
    db.add_contact(new_contact("Alice")).unwrap();
    db.add_contact(new_contact("Bob")).unwrap();
    ListCommand::new(KindFilter::All).execute(&mut db).unwrap();

    let err = DeleteCommand::new(Index::from_one_based(3).unwrap())
        .execute(&mut db)
        .unwrap_err();

    assert!(matches!(err, AddressBookError::DisplayedIndexTooLarge));
    assert_eq!(db.contacts().unwrap().len(), 2);
    assert_eq!(db.displayed_rows().unwrap().len(), 2);
}

#[test]
fn test_duplicate_name_rejected_by_storage() {
    let (_temp_file, mut db) = create_test_db();
    db.add_contact(new_contact("Alice")).unwrap();

    let err = db.add_contact(new_contact("ALICE")).unwrap_err();
    assert!(matches!(err, AddressBookError::Database { .. }));
    assert_eq!(db.contacts().unwrap().len(), 1);
}
