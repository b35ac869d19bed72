//! Commands adding contacts and events.

use log::debug;

use super::{Command, CommandResult};
use crate::{
    display::CreateResult,
    error::{AddressBookError, Result},
    model::Model,
    models::{NewContact, NewEvent},
};

/// Adds a contact with a name not used by any other contact.
#[derive(Debug, Clone, PartialEq)]
pub struct AddContactCommand {
    contact: NewContact,
}

impl AddContactCommand {
    pub fn new(contact: NewContact) -> Self {
        Self { contact }
    }
}

impl Command for AddContactCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult> {
        let contact = self.contact.clone().validate()?;

        if model.has_contact(&contact.name)? {
            return Err(AddressBookError::DuplicateContact { name: contact.name });
        }

        let contact = model.add_contact(contact)?;
        debug!("Added contact {}", contact.id);
        Ok(CommandResult::new(CreateResult::new(contact).to_string()))
    }
}

/// Adds an event whose participants are existing contacts.
#[derive(Debug, Clone, PartialEq)]
pub struct AddEventCommand {
    event: NewEvent,
}

impl AddEventCommand {
    pub fn new(event: NewEvent) -> Self {
        Self { event }
    }
}

impl Command for AddEventCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult> {
        let event = self.event.clone().validate()?;

        let contacts = model.contacts()?;
        if let Some(missing) = event
            .contact_ids
            .iter()
            .find(|id| !contacts.iter().any(|c| c.id == **id))
        {
            return Err(AddressBookError::ContactNotFound { id: *missing });
        }

        let event = model.add_event(event)?;
        debug!("Added event {}", event.id);
        Ok(CommandResult::new(CreateResult::new(event).to_string()))
    }
}
