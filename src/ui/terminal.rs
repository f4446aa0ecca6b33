//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{OutputMode, Theme, UserInterface};

/// Writes status lines to stdout and errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    out_theme: Theme,
    err_theme: Theme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a terminal UI, detecting color support per stream.
    pub fn new(mode: OutputMode) -> Self {
        let out = Term::stdout();
        let err = Term::stderr();

        Self {
            out_theme: Theme::for_term(&out),
            err_theme: Theme::for_term(&err).for_stderr(),
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
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.out_theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.out_theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.err_theme.format_error(msg)).ok();
    }
}
