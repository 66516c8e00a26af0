//! JSON Schema generation for devpack settings.
//!
//! Generates a JSON Schema (Draft-07) for `.devpack/config.yml`, enabling
//! editor autocomplete and validation.

use serde_json::{json, Value};

use super::schema::{OutputNames, SharedDependency};

/// Generates JSON Schema for the settings file.
pub struct SchemaGenerator;

impl SchemaGenerator {
    /// Create a new schema generator.
    pub fn new() -> Self {
        Self
    }

    /// Generate the complete JSON Schema for `.devpack/config.yml`.
    pub fn generate(&self) -> Value {
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": "devpack settings",
            "description": "Overrides for the resolved bundler build configuration",
            "type": "object",
            "properties": {
                "shared_dependency": self.shared_dependency_schema(),
                "output": self.output_schema()
            },
            "additionalProperties": false
        })
    }

    fn shared_dependency_schema(&self) -> Value {
        let defaults = SharedDependency::default();
        json!({
            "type": "object",
            "description": "Dependency aliased to one installed copy and supplied by the host page in production",
            "properties": {
                "package": {
                    "type": "string",
                    "minLength": 1,
                    "default": defaults.package,
                    "description": "Package name; alias key and node_modules directory"
                },
                "global_name": {
                    "type": "string",
                    "minLength": 1,
                    "default": defaults.global_name,
                    "description": "Global variable exposing the dependency on the host page"
                },
                "external_request": {
                    "type": "string",
                    "minLength": 1,
                    "default": defaults.external_request,
                    "description": "Module request left external in production builds"
                }
            },
            "additionalProperties": false
        })
    }

    fn output_schema(&self) -> Value {
        let defaults = OutputNames::default();
        let component = |default: String, description: &str| {
            json!({
                "type": "string",
                "minLength": 1,
                "pattern": "^[^/\\\\]+$",
                "default": default,
                "description": description
            })
        };
        json!({
            "type": "object",
            "description": "Output directory and bundle filename per mode",
            "properties": {
                "production_dir": component(defaults.production_dir, "Output directory for production builds"),
                "development_dir": component(defaults.development_dir, "Output directory for development builds"),
                "production_filename": component(defaults.production_filename, "Bundle filename for production builds"),
                "development_filename": component(defaults.development_filename, "Bundle filename for development builds")
            },
            "additionalProperties": false
        })
    }
}

impl Default for SchemaGenerator {
    fn default() -> Self {
        Self::new()
    }
}
