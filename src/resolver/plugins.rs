//! Plugins that run beside the module rules.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::detection::TSCONFIG_FILE;

/// Options for the type-checking plugin.
///
/// The checker verifies types but never alters emitted code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeCheckOptions {
    /// Report diagnostics without blocking the build. Off in production, so
    /// type errors fail the build there.
    #[serde(rename = "async")]
    pub is_async: bool,
    pub use_typescript_incremental_api: bool,
    pub check_syntactic_errors: bool,
    pub tsconfig: PathBuf,
    /// Compiler the checker loads: the project's own installed copy.
    pub typescript: PathBuf,
    pub report_files: Vec<String>,
    /// Suppress the checker's own banner output.
    pub silent: bool,
}

impl TypeCheckOptions {
    /// Options for a project rooted at `project_root`.
    pub fn new(project_root: &Path, is_async: bool) -> Self {
        Self {
            is_async,
            use_typescript_incremental_api: true,
            check_syntactic_errors: true,
            tsconfig: project_root.join(TSCONFIG_FILE),
            typescript: project_root.join("node_modules").join("typescript"),
            report_files: vec!["**".to_string()],
            silent: true,
        }
    }
}

/// A bundler plugin with its options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "plugin", content = "options")]
pub enum Plugin {
    #[serde(rename = "fork-ts-checker-webpack-plugin")]
    TypeCheck(TypeCheckOptions),
}
