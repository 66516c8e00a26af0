//! Project layout detection.

pub mod file_detection;
pub mod layout;

pub use file_detection::canonicalize_existing;

pub use layout::{
    EntryFile, EntryRoot, ProjectLayout, SourceExtension, LINT_CONFIG_FILES, TSCONFIG_FILE,
};
