//! Output verbosity.

/// Output verbosity mode.
///
/// Primary output (a resolved configuration, a layout) is always printed;
/// the mode only governs the chatter around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also show where settings came from and other details.
    Verbose,
    /// Show headers and status lines.
    #[default]
    Normal,
    /// Show primary output and errors only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows details such as settings sources.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows headers, successes and warnings.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
