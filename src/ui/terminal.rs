//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, DevpackTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
///
/// Messages and headers go to stdout; successes, warnings and errors go to
/// stderr so that piped configuration output stays clean. Each stream
/// decides on colors by itself.
pub struct TerminalUI {
    out: Term,
    err: Term,
    out_theme: DevpackTheme,
    err_theme: DevpackTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI. `no_color` forces plain output on both
    /// streams.
    pub fn new(mode: OutputMode, no_color: bool) -> Self {
        let out = Term::stdout();
        let err = Term::stderr();
        let theme_for = |term: &Term| {
            if !no_color && should_use_colors(term) {
                DevpackTheme::new()
            } else {
                DevpackTheme::plain()
            }
        };

        Self {
            out_theme: theme_for(&out),
            err_theme: theme_for(&err),
            out,
            err,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.err_theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.err_theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.err_theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.out_theme.format_header(title)).ok();
        }
    }
}

/// Create a terminal UI. Colors are off when `no_color` is set, `NO_COLOR`
/// is present, or the stream is not a terminal.
pub fn create_ui(mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode, no_color))
}
