//! Deletes a contact or event by its position in the displayed list.

use log::debug;

use super::{Command, CommandResult};
use crate::{
    display::DeleteResult,
    error::{AddressBookError, Result},
    model::Model,
    models::{Displayable, Index},
};

/// Deletes the item shown at a 1-based position of the last listing.
///
/// Two commands are equal when they target the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCommand {
    target_index: Index,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";

    pub fn new(target_index: Index) -> Self {
        Self { target_index }
    }

    pub fn target_index(&self) -> Index {
        self.target_index
    }
}

impl Command for DeleteCommand {
    /// # Errors
    ///
    /// - `DisplayedIndexTooLarge` when the index is past the end of the
    ///   displayed list; the model is not touched.
    /// - `UnknownItem` when the model cannot resolve the targeted entry.
    ///   Unresolvable entries elsewhere in the list do not matter.
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult> {
        if self.target_index.one_based() > model.displayed_len()? {
            return Err(AddressBookError::DisplayedIndexTooLarge);
        }

        let item_to_delete = model.displayed_item(self.target_index)?;
        debug!(
            "Deleting {} {} at displayed index {}",
            item_to_delete.kind().as_str(),
            item_to_delete.id(),
            self.target_index.one_based()
        );

        let feedback = match item_to_delete {
            Displayable::Contact(contact) => {
                model.delete_contact(&contact)?;
                DeleteResult::new(contact).to_string()
            }
            Displayable::Event(event) => {
                model.delete_event(&event)?;
                DeleteResult::new(event).to_string()
            }
        };

        Ok(CommandResult::new(feedback))
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, Timestamp};

    use super::*;
    use crate::{
        model::InMemoryModel,
        models::{Contact, DisplayFilter, Event, NewContact, NewEvent},
    };

    /// Wraps a model and counts calls to the two deletion methods.
    #[derive(Default)]
    struct RecordingModel {
        inner: InMemoryModel,
        contact_deletes: usize,
        event_deletes: usize,
    }

    impl Model for RecordingModel {
        fn contacts(&self) -> Result<Vec<Contact>> {
            self.inner.contacts()
        }

        fn events(&self) -> Result<Vec<Event>> {
            self.inner.events()
        }

        fn add_contact(&mut self, contact: NewContact) -> Result<Contact> {
            self.inner.add_contact(contact)
        }

        fn add_event(&mut self, event: NewEvent) -> Result<Event> {
            self.inner.add_event(event)
        }

        fn displayed_list(&self) -> Result<Vec<Displayable>> {
            self.inner.displayed_list()
        }

        fn displayed_len(&self) -> Result<usize> {
            self.inner.displayed_len()
        }

        fn displayed_item(&self, index: Index) -> Result<Displayable> {
            self.inner.displayed_item(index)
        }

        fn update_displayed_list(&mut self, filter: &DisplayFilter) -> Result<usize> {
            self.inner.update_displayed_list(filter)
        }

        fn delete_contact(&mut self, contact: &Contact) -> Result<()> {
            self.contact_deletes += 1;
            self.inner.delete_contact(contact)
        }

        fn delete_event(&mut self, event: &Event) -> Result<()> {
            self.event_deletes += 1;
            self.inner.delete_event(event)
        }
    }

    fn contact(id: u64, name: &str) -> Contact {
        Contact {
            id,
            name: name.to_string(),
            phone: Some("98765432".to_string()),
            email: None,
            address: None,
            tags: vec![],
            created_at: Timestamp::from_second(1640995200).unwrap(),
        }
    }

    fn event(id: u64, name: &str) -> Event {
        Event {
            id,
            name: name.to_string(),
            description: None,
            date: date(2024, 10, 12),
            contact_ids: vec![],
            created_at: Timestamp::from_second(1640995200).unwrap(),
        }
    }

    /// Model whose displayed list is exactly `items`, in order.
    fn model_showing(items: &[Displayable]) -> RecordingModel {
        let mut contacts = Vec::new();
        let mut events = Vec::new();
        for item in items {
            match item {
                Displayable::Contact(c) => contacts.push(c.clone()),
                Displayable::Event(e) => events.push(e.clone()),
            }
        }
        let mut inner = InMemoryModel::with_items(contacts, events);
        inner.set_displayed(items);
        RecordingModel {
            inner,
            ..Default::default()
        }
    }

    fn delete_at(one_based: usize) -> DeleteCommand {
        DeleteCommand::new(Index::from_one_based(one_based).unwrap())
    }

    #[test]
    fn test_delete_first_contact() {
        let contact_a = contact(1, "Alice");
        let mut model = model_showing(&[
            contact_a.clone().into(),
            event(1, "Banquet").into(),
            contact(2, "Carol").into(),
        ]);

        let result = delete_at(1).execute(&mut model).unwrap();

        assert_eq!(
            result.feedback,
            format!("Deleted Contact: {}", Displayable::from(contact_a))
        );
        assert_eq!(model.contacts().unwrap().len(), 1);
        assert_eq!(model.events().unwrap().len(), 1);
        assert_eq!(model.contact_deletes, 1);
        assert_eq!(model.event_deletes, 0);
    }

    #[test]
    fn test_delete_last_item_event() {
        let event_b = event(1, "Banquet");
        let mut model = model_showing(&[contact(1, "Alice").into(), event_b.clone().into()]);

        let result = delete_at(2).execute(&mut model).unwrap();

        assert_eq!(
            result.feedback,
            format!("Deleted Event: {}", Displayable::from(event_b))
        );
        assert!(model.events().unwrap().is_empty());
        assert_eq!(model.contacts().unwrap().len(), 1);
        assert_eq!(model.event_deletes, 1);
        assert_eq!(model.contact_deletes, 0);
    }

    #[test]
    fn test_index_past_end_leaves_model_unchanged() {
        let mut model = model_showing(&[contact(1, "Alice").into(), event(1, "Banquet").into()]);
        let before = model.displayed_list().unwrap();

        let err = delete_at(5).execute(&mut model).unwrap_err();

        assert!(matches!(err, AddressBookError::DisplayedIndexTooLarge));
        assert_eq!(model.displayed_list().unwrap(), before);
        assert_eq!(model.contact_deletes + model.event_deletes, 0);
    }

    #[test]
    fn test_empty_list_rejects_any_index() {
        let mut model = model_showing(&[]);

        for index in [1, 2, 100] {
            let err = delete_at(index).execute(&mut model).unwrap_err();
            assert!(matches!(err, AddressBookError::DisplayedIndexTooLarge));
        }
    }

    #[test]
    fn test_boundary_index_equal_to_length_succeeds() {
        let mut model = model_showing(&[
            contact(1, "Alice").into(),
            contact(2, "Bob").into(),
            contact(3, "Carol").into(),
        ]);

        delete_at(3).execute(&mut model).unwrap();

        let names: Vec<_> = model
            .contacts()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Alice".to_string(), "Bob".to_string()]);
    }

    #[test]
    fn test_boundary_index_one_past_length_fails() {
        let mut model = model_showing(&[
            contact(1, "Alice").into(),
            contact(2, "Bob").into(),
            contact(3, "Carol").into(),
        ]);

        let err = delete_at(4).execute(&mut model).unwrap_err();

        assert!(matches!(err, AddressBookError::DisplayedIndexTooLarge));
        assert_eq!(model.contacts().unwrap().len(), 3);
    }

    #[test]
    fn test_single_item_list_is_deletable() {
        let mut model = model_showing(&[event(1, "Banquet").into()]);

        delete_at(1).execute(&mut model).unwrap();

        assert!(model.displayed_list().unwrap().is_empty());
    }

    #[test]
    fn test_remaining_items_keep_relative_order() {
        let mut model = model_showing(&[
            contact(1, "Alice").into(),
            event(1, "Banquet").into(),
            contact(2, "Carol").into(),
            event(2, "Dinner").into(),
        ]);

        delete_at(2).execute(&mut model).unwrap();

        let names: Vec<_> = model
            .displayed_list()
            .unwrap()
            .iter()
            .map(|i| i.name().to_string())
            .collect();
        assert_eq!(names, vec!["Alice", "Carol", "Dinner"]);
    }

    #[test]
    fn test_unresolvable_entry_reports_unknown_item() {
        let mut model = RecordingModel::default();
        model.inner.set_displayed(&[contact(9, "Ghost").into()]);

        let err = delete_at(1).execute(&mut model).unwrap_err();

        assert!(matches!(err, AddressBookError::UnknownItem));
        assert_eq!(err.to_string(), "Unknown item displayed in list.");
        assert_eq!(model.contact_deletes + model.event_deletes, 0);
    }

    #[test]
    fn test_unresolvable_entry_elsewhere_does_not_block_delete() {
        let alice = contact(1, "Alice");
        let mut model = model_showing(&[alice.clone().into()]);
        model
            .inner
            .set_displayed(&[alice.clone().into(), contact(42, "Ghost").into()]);

        let result = delete_at(1).execute(&mut model).unwrap();

        assert_eq!(
            result.feedback,
            format!("Deleted Contact: {}", Displayable::from(alice))
        );
        assert!(model.contacts().unwrap().is_empty());
        assert_eq!(model.contact_deletes, 1);
    }

    #[test]
    fn test_unresolvable_entry_with_index_past_end_is_too_large() {
        let alice = contact(1, "Alice");
        let mut model = model_showing(&[alice.clone().into()]);
        model
            .inner
            .set_displayed(&[alice.into(), contact(42, "Ghost").into()]);

        let err = delete_at(5).execute(&mut model).unwrap_err();

        assert!(matches!(err, AddressBookError::DisplayedIndexTooLarge));
        assert_eq!(model.contacts().unwrap().len(), 1);
        assert_eq!(model.contact_deletes + model.event_deletes, 0);
    }

    #[test]
    fn test_equality_by_index() {
        let first = delete_at(1);
        assert_eq!(first, delete_at(1));
        assert_ne!(first, delete_at(2));
        assert_eq!(first.target_index(), Index::from_zero_based(0));
    }

    #[test]
    fn test_debug_names_target_index() {
        let rendered = format!("{:?}", delete_at(3));
        assert!(rendered.contains("DeleteCommand"));
        assert!(rendered.contains("target_index"));
    }
}
