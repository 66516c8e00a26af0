//! Explain command implementation.
//!
//! The `devpack explain` command lists the pipeline stages whose conditions
//! match a file, in the order the bundler would apply them.

use std::path::{Component, Path, PathBuf};

use crate::cli::args::ExplainArgs;
use crate::config::load_settings_with_override;
use crate::detection::{canonicalize_existing, ProjectLayout};
use crate::environment::EnvironmentDescriptor;
use crate::error::{DevpackError, Result};
use crate::resolver::ConfigResolver;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::resolve::INVALID_MODE_EXIT;

/// The explain command implementation.
pub struct ExplainCommand {
    project_root: PathBuf,
    settings_path: Option<PathBuf>,
    args: ExplainArgs,
}

impl ExplainCommand {
    /// Create a new explain command.
    pub fn new(project_root: &Path, args: ExplainArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            settings_path: None,
            args,
        }
    }

    /// Load settings from an explicit file.
    pub fn with_settings_path(mut self, path: Option<&Path>) -> Self {
        self.settings_path = path.map(Path::to_path_buf);
        self
    }

    /// The file to match, canonicalized so it compares against the
    /// canonical roots the rules are built from.
    fn target(&self, root: &Path) -> Result<PathBuf> {
        let path = if self.args.file.is_absolute() {
            self.args.file.clone()
        } else {
            let relative: PathBuf = self
                .args
                .file
                .components()
                .filter(|c| !matches!(c, Component::CurDir))
                .collect();
            root.join(relative)
        };
        Ok(canonicalize_existing(&path)?)
    }
}

impl Command for ExplainCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let env = match EnvironmentDescriptor::from_mode_value(self.args.mode.as_deref()) {
            Ok(env) => env,
            Err(e @ DevpackError::InvalidMode { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(INVALID_MODE_EXIT));
            }
            Err(e) => return Err(e),
        };

        let settings =
            load_settings_with_override(&self.project_root, self.settings_path.as_deref())?;
        let layout = ProjectLayout::probe(&self.project_root)?;
        let config = ConfigResolver::new(settings).resolve_layout(&env, &layout)?;

        let target = self.target(&layout.root)?;
        let stages = config.stages_for(&target)?;
        tracing::debug!(file = %target.display(), ?stages, "Matched pipeline stages");

        ui.show_header(&format!("{} ({})", self.args.file.display(), env.mode()));
        if stages.is_empty() {
            ui.warning("No pipeline stage applies to this file");
        }
        for stage in stages {
            ui.message(&stage.to_string());
        }

        Ok(CommandResult::success())
    }
}
