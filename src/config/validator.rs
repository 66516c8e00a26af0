//! Settings validation.
//!
//! Collects every problem rather than stopping at the first one.

use crate::config::schema::Settings;
use crate::error::{DevpackError, Result};

/// A single validation problem, keyed by the dotted settings field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

/// Validate settings and return all problems found.
pub fn validate_settings(settings: &Settings) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let dep = &settings.shared_dependency;
    for (field, value) in [
        ("shared_dependency.package", &dep.package),
        ("shared_dependency.global_name", &dep.global_name),
        ("shared_dependency.external_request", &dep.external_request),
    ] {
        if value.trim().is_empty() {
            errors.push(ValidationError {
                field: field.to_string(),
                message: "must not be empty".to_string(),
            });
        }
    }

    let out = &settings.output;
    for (field, value) in [
        ("output.production_dir", &out.production_dir),
        ("output.development_dir", &out.development_dir),
        ("output.production_filename", &out.production_filename),
        ("output.development_filename", &out.development_filename),
    ] {
        if value.trim().is_empty() {
            errors.push(ValidationError {
                field: field.to_string(),
                message: "must not be empty".to_string(),
            });
        } else if value.contains(['/', '\\']) || value == "." || value == ".." {
            errors.push(ValidationError {
                field: field.to_string(),
                message: format!("'{}' must be a single path component", value),
            });
        }
    }

    errors
}

/// Validate settings, failing with the collected problems.
pub fn validate(settings: &Settings) -> Result<()> {
    let errors = validate_settings(settings);
    if errors.is_empty() {
        return Ok(());
    }

    let message = errors
        .iter()
        .map(|e| format!("{} {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");
    Err(DevpackError::ConfigValidationError { message })
}
