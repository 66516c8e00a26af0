//! Schema command implementation.
//!
//! The `devpack schema` command prints a JSON Schema for
//! `.devpack/config.yml`.

use crate::config::SchemaGenerator;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::render;

/// The schema command implementation.
#[derive(Debug, Default)]
pub struct SchemaCommand;

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema = SchemaGenerator::new().generate();
        ui.message(&render(&schema, true)?);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn prints_draft_07_schema() {
        let mut ui = MockUI::new();

        let result = SchemaCommand::new().execute(&mut ui).unwrap();

        assert!(result.success);
        let value: serde_json::Value = serde_json::from_str(&ui.output()).unwrap();
        assert_eq!(value["$schema"], "http://json-schema.org/draft-07/schema#");
        assert!(value["properties"]["shared_dependency"].is_object());
    }
}
