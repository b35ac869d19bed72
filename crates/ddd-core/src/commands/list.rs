//! Lists every contact and/or event.

use super::{Command, CommandResult};
use crate::{
    error::Result,
    model::Model,
    models::{DisplayFilter, KindFilter},
};

/// Shows all items of the selected kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListCommand {
    kind: KindFilter,
}

impl ListCommand {
    pub fn new(kind: KindFilter) -> Self {
        Self { kind }
    }
}

impl Command for ListCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult> {
        let count = model.update_displayed_list(&DisplayFilter::of_kind(self.kind))?;
        let noun = match self.kind {
            KindFilter::All => "item",
            KindFilter::Contacts => "contact",
            KindFilter::Events => "event",
        };
        let plural = if count == 1 { "" } else { "s" };
        Ok(CommandResult::with_list(format!(
            "Listed {count} {noun}{plural}"
        )))
    }
}
