//! Layout command implementation.
//!
//! The `devpack layout` command shows what the probe found on disk.

use std::path::{Path, PathBuf};

use crate::cli::args::LayoutArgs;
use crate::detection::ProjectLayout;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{or_none, render};

/// The layout command implementation.
pub struct LayoutCommand {
    project_root: PathBuf,
    args: LayoutArgs,
}

impl LayoutCommand {
    /// Create a new layout command.
    pub fn new(project_root: &Path, args: LayoutArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    fn show_summary(&self, layout: &ProjectLayout, ui: &mut dyn UserInterface) {
        ui.show_header("Project layout");
        ui.message(&format!("root:        {}", layout.root.display()));
        ui.message(&format!(
            "typescript:  {}",
            if layout.is_typescript { "yes" } else { "no" }
        ));
        ui.message(&format!(
            "src entry:   {}",
            or_none(layout.src_entry.map(|e| e.relative_path()))
        ));
        ui.message(&format!(
            "test entry:  {}",
            or_none(layout.test_entry.map(|e| e.relative_path()))
        ));
        ui.message(&format!(
            "lint config: {}",
            or_none(layout.lint_config.clone())
        ));

        match (layout.src_entry, layout.test_entry) {
            (None, None) => ui.warning("No entry file found; neither mode can resolve"),
            (None, Some(_)) => ui.warning("No src/index entry; production builds will fail"),
            (Some(_), None) => ui.warning("No test/index entry; development builds will fail"),
            (Some(_), Some(_)) => ui.success("Both build modes have an entry")
        }
    }
}

impl Command for LayoutCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let layout = ProjectLayout::probe(&self.project_root)?;

        if self.args.json {
            ui.message(&render(&layout, true)?);
        } else {
            self.show_summary(&layout, ui);
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn summary_shows_entries() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src")).unwrap();
        fs::create_dir_all(temp.path().join("test")).unwrap();
        fs::write(temp.path().join("src/index.ts"), "").unwrap();
        fs::write(temp.path().join("test/index.js"), "").unwrap();
        fs::write(temp.path().join("tsconfig.json"), "{}").unwrap();
        let cmd = LayoutCommand::new(temp.path(), LayoutArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("typescript:  yes"));
        assert!(ui.has_message("src entry:   ./src/index.ts"));
        assert!(ui.has_message("test entry:  ./test/index.js"));
        assert!(ui.has_message("lint config: (none)"));
        assert!(ui.warnings().is_empty());
        assert_eq!(ui.successes(), ["Both build modes have an entry"]);
    }

    #[test]
    fn warns_when_production_entry_missing() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("test")).unwrap();
        fs::write(temp.path().join("test/index.js"), "").unwrap();
        let cmd = LayoutCommand::new(temp.path(), LayoutArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_warning("production builds will fail"));
        assert!(ui.successes().is_empty());
    }

    #[test]
    fn json_output_parses() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".eslintrc.json"), "{}").unwrap();
        let cmd = LayoutCommand::new(temp.path(), LayoutArgs { json: true });
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.output()).unwrap();
        assert_eq!(value["is_typescript"], false);
        assert!(value["src_entry"].is_null());
        assert_eq!(value["lint_config"], ".eslintrc.json");
    }

    #[test]
    fn missing_root_is_an_error() {
        let temp = TempDir::new().unwrap();
        let cmd = LayoutCommand::new(&temp.path().join("absent"), LayoutArgs::default());
        let mut ui = MockUI::new();

        assert!(cmd.execute(&mut ui).is_err());
    }
}
