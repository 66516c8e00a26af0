//! Settings schema definitions.
//!
//! These structs map to `.devpack/config.yml`. Every field has a default, so
//! a project without settings files resolves exactly as if an empty file
//! were present.

use serde::{Deserialize, Serialize};

/// Root settings structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// The dependency every project shares with its host page.
    pub shared_dependency: SharedDependency,

    /// Output directory and filename choices per mode.
    pub output: OutputNames,
}

/// A dependency resolved to one physical copy and, in production,
/// supplied by the consuming environment instead of being bundled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SharedDependency {
    /// Package name, used as the alias key and the `node_modules` directory.
    pub package: String,

    /// Global variable the host page exposes it under.
    pub global_name: String,

    /// Module request declared external in production builds.
    pub external_request: String,
}

impl Default for SharedDependency {
    fn default() -> Self {
        Self {
            package: "blockly".to_string(),
            global_name: "Blockly".to_string(),
            external_request: "blockly/core".to_string(),
        }
    }
}

/// Output directory and bundle filename per mode.
///
/// The public path is always derived from the directory name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputNames {
    pub production_dir: String,
    pub development_dir: String,
    pub production_filename: String,
    pub development_filename: String,
}

impl Default for OutputNames {
    fn default() -> Self {
        Self {
            production_dir: "dist".to_string(),
            development_dir: "build".to_string(),
            production_filename: "index.js".to_string(),
            development_filename: "test_bundle.js".to_string(),
        }
    }
}
