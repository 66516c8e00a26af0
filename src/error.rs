//! Error types for devpack operations.
//!
//! This module defines [`DevpackError`], the error type returned by the
//! resolver, the layout probe and the settings loader, and a [`Result`]
//! type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Invalid input (`InvalidMode`, `MissingEntry`, bad settings) fails fast
//!   before any configuration is produced
//! - Filesystem errors from probing are propagated unmodified via `Io`
//! - Lint findings and type errors are never errors of this crate; they are
//!   payloads handed to the bundler's collaborators

use std::path::PathBuf;
use thiserror::Error;

use crate::environment::Mode;

/// Core error type for devpack operations.
#[derive(Debug, Error)]
pub enum DevpackError {
    /// Build mode missing or not one of the recognized literals.
    #[error(
        "Invalid mode {}: expected 'development' or 'production'",
        .value.as_deref().map_or_else(|| "(none)".to_string(), |v| format!("'{}'", v))
    )]
    InvalidMode { value: Option<String> },

    /// No entry candidate exists for the active mode.
    #[error("No entry file for {mode} build (tried {})", .candidates.join(", "))]
    MissingEntry {
        mode: Mode,
        candidates: Vec<String>,
    },

    /// Failed to parse a settings file.
    #[error("Failed to parse settings at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Settings parsed but hold unusable values.
    #[error("Invalid settings: {message}")]
    ConfigValidationError { message: String },

    /// A module rule condition failed to compile.
    #[error("Invalid rule pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for devpack operations.
pub type Result<T> = std::result::Result<T, DevpackError>;
