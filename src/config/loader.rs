//! Settings file discovery and loading.
//!
//! Settings are optional. Layers are merged in this order (later overrides
//! earlier):
//! 1. Project settings (`.devpack/config.yml`)
//! 2. Local overrides (`.devpack/config.local.yml`)

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::merger::merge_layers;
use crate::config::schema::Settings;
use crate::config::validator::validate;
use crate::error::{DevpackError, Result};

/// Directory holding settings files, relative to the project root.
pub const SETTINGS_DIR: &str = ".devpack";

/// Paths to existing settings files in merge order.
#[derive(Debug, Clone, Default)]
pub struct SettingsPaths {
    /// Project settings: .devpack/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .devpack/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl SettingsPaths {
    /// Discover settings files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        let dir = project_root.join(SETTINGS_DIR);
        Self {
            project: Some(dir.join("config.yml")).filter(|p| p.is_file()),
            project_local: Some(dir.join("config.local.yml")).filter(|p| p.is_file()),
        }
    }

    /// All existing settings paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.project_local.iter()).collect()
    }
}

/// Load one settings file as a raw YAML value (for merging).
pub fn load_settings_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path)?;

    serde_yaml::from_str(&content).map_err(|e| DevpackError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Parse and validate a merged value into typed settings.
fn parse_settings(value: serde_yaml::Value, source_path: &Path) -> Result<Settings> {
    let settings: Settings =
        serde_yaml::from_value(value).map_err(|e| DevpackError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;
    validate(&settings)?;
    Ok(settings)
}

/// Load and merge the settings for a project.
///
/// Returns defaults when no settings file exists.
pub fn load_settings(project_root: &Path) -> Result<Settings> {
    let paths = SettingsPaths::discover(project_root);
    let existing = paths.all_existing();

    let Some(last) = existing.last() else {
        tracing::debug!("No settings files found, using defaults");
        return Ok(Settings::default());
    };

    let mut layers = Vec::with_capacity(existing.len());
    for path in &existing {
        tracing::debug!("Loading settings from {}", path.display());
        layers.push(load_settings_value(path)?);
    }

    parse_settings(merge_layers(&layers), last)
}

/// Load settings with an optional path override.
///
/// An explicit path is loaded alone, without layering, and must exist.
pub fn load_settings_with_override(
    project_root: &Path,
    settings_override: Option<&Path>,
) -> Result<Settings> {
    match settings_override {
        Some(path) => parse_settings(merge_layers(&[load_settings_value(path)?]), path),
        None => load_settings(project_root),
    }
}
