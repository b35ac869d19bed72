//! Finds items whose name contains any of the given keywords.

use super::{Command, CommandResult};
use crate::{
    error::{AddressBookError, Result},
    model::Model,
    models::{DisplayFilter, KindFilter},
};

/// Narrows the displayed list to items matching keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    filter: DisplayFilter,
}

impl FindCommand {
    pub fn new(keywords: Vec<String>, kind: KindFilter) -> Self {
        Self {
            filter: DisplayFilter::with_keywords(kind, keywords),
        }
    }
}

impl Command for FindCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult> {
        if self.filter.keywords.is_empty() {
            return Err(AddressBookError::invalid_input("keywords")
                .with_reason("at least one keyword is required"));
        }

        let count = model.update_displayed_list(&self.filter)?;
        let plural = if count == 1 { "" } else { "s" };
        Ok(CommandResult::with_list(format!(
            "{count} item{plural} listed!"
        )))
    }
}
