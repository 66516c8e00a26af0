//! Settings loading, merging, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//! - JSON Schema generation in [`json_schema`]
//!
//! # Example
//!
//! ```
//! use devpack::config::load_settings;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::create_dir_all(temp.path().join(".devpack")).unwrap();
//! fs::write(
//!     temp.path().join(".devpack/config.yml"),
//!     "shared_dependency:\n  global_name: Workspace\n",
//! )
//! .unwrap();
//!
//! let settings = load_settings(temp.path()).unwrap();
//! assert_eq!(settings.shared_dependency.global_name, "Workspace");
//! assert_eq!(settings.shared_dependency.package, "blockly");
//! ```

pub mod json_schema;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use json_schema::SchemaGenerator;
pub use loader::{
    load_settings, load_settings_value, load_settings_with_override, SettingsPaths, SETTINGS_DIR,
};
pub use merger::{deep_merge, merge_layers};
pub use schema::{OutputNames, Settings, SharedDependency};
pub use validator::{validate, validate_settings, ValidationError};
