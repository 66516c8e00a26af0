//! devpack - Bundler build configuration resolution.
//!
//! devpack inspects a project directory and, for a build mode, derives a
//! complete bundler configuration: entry point, output target, module
//! resolution, the lint and transpile pipeline, type checking, and
//! externals.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional settings loading, merging, and validation
//! - [`detection`] - Filesystem probing into a [`detection::ProjectLayout`]
//! - [`environment`] - Build mode and environment descriptor
//! - [`error`] - Error types and result aliases
//! - [`resolver`] - The configuration resolver and its output types
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use devpack::environment::{EnvironmentDescriptor, Mode};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! fs::create_dir_all(temp.path().join("test")).unwrap();
//! fs::write(temp.path().join("test/index.ts"), "").unwrap();
//! fs::write(temp.path().join("tsconfig.json"), "{}").unwrap();
//!
//! let env = EnvironmentDescriptor::new(Mode::Development);
//! let config = devpack::resolve(&env, temp.path()).unwrap();
//!
//! assert_eq!(config.entry, "./test/index.ts");
//! assert_eq!(config.resolve.extensions, [".ts", ".js"]);
//! assert!(config.type_check().unwrap().is_async);
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod environment;
pub mod error;
pub mod resolver;
pub mod ui;

use std::path::Path;

pub use error::{DevpackError, Result};
pub use resolver::{BuildConfiguration, ConfigResolver};

/// Resolve a project's configuration, honoring its `.devpack/` settings.
pub fn resolve(
    env: &environment::EnvironmentDescriptor,
    project_root: &Path,
) -> Result<BuildConfiguration> {
    let settings = config::load_settings(project_root)?;
    ConfigResolver::new(settings).resolve(env, project_root)
}
