//! Resolve command implementation.
//!
//! The `devpack resolve` command prints the build configuration for the
//! project in the requested mode.

use std::path::{Path, PathBuf};

use crate::cli::args::ResolveArgs;
use crate::config::{load_settings_with_override, SettingsPaths};
use crate::environment::EnvironmentDescriptor;
use crate::error::{DevpackError, Result};
use crate::resolver::ConfigResolver;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::render;

/// Exit code for an absent or unrecognized mode.
pub(crate) const INVALID_MODE_EXIT: i32 = 2;

/// The resolve command implementation.
pub struct ResolveCommand {
    project_root: PathBuf,
    settings_path: Option<PathBuf>,
    args: ResolveArgs,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(project_root: &Path, args: ResolveArgs) -> Self {
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

    fn settings_sources(&self) -> Vec<PathBuf> {
        match &self.settings_path {
            Some(path) => vec![path.clone()],
            None => SettingsPaths::discover(&self.project_root)
                .all_existing()
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

impl Command for ResolveCommand {
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
        let config = ConfigResolver::new(settings).resolve(&env, &self.project_root)?;

        // Comment lines would break JSON consumers
        if !self.args.json && ui.output_mode().shows_details() {
            for path in self.settings_sources() {
                ui.message(&format!("# settings: {}", path.display()));
            }
        }

        ui.message(render(&config, self.args.json)?.trim_end());
        Ok(CommandResult::success())
    }
}
