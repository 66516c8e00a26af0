//! Build mode and the environment descriptor derived from it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DevpackError, Result};

/// Build mode handed to the bundler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    Production,
}

impl Mode {
    /// The literal the bundler expects for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl FromStr for Mode {
    type Err = DevpackError;

    /// Parse a mode literal. Matching is exact: `Production` is rejected.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(DevpackError::InvalidMode {
                value: Some(other.to_string()),
            }),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The validated build environment.
///
/// Exactly one of [`is_development`](Self::is_development) and
/// [`is_production`](Self::is_production) is true.
///
/// # Example
///
/// ```
/// use devpack::environment::{EnvironmentDescriptor, Mode};
///
/// let env = EnvironmentDescriptor::from_mode_value(Some("production")).unwrap();
/// assert_eq!(env.mode(), Mode::Production);
/// assert!(env.is_production());
/// assert!(!env.is_development());
///
/// assert!(EnvironmentDescriptor::from_mode_value(None).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentDescriptor {
    mode: Mode,
}

impl EnvironmentDescriptor {
    /// Create a descriptor for an already-validated mode.
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Validate a raw mode value.
    ///
    /// Fails with `InvalidMode` when the value is absent or unrecognized.
    pub fn from_mode_value(value: Option<&str>) -> Result<Self> {
        let value = value.ok_or(DevpackError::InvalidMode { value: None })?;
        Ok(Self::new(value.parse()?))
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_development(&self) -> bool {
        self.mode == Mode::Development
    }

    pub fn is_production(&self) -> bool {
        self.mode == Mode::Production
    }
}
