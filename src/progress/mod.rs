//! Loading indicator for terminal output.
//!
//! Prints a single status line to stderr while users load, clears it once
//! the list is in, and replaces it with a red failure line on error.
//! Silenced with `--no-progress`; state is tracked either way.

use std::io::{self, Write};

use colored::Colorize;

use crate::picker::LoadingIndicator;

/// What the indicator line currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadingStatus {
    /// Status line on screen.
    Loading,
    /// Line cleared.
    Hidden,
    /// Failure line on screen.
    Failed(String),
}

/// Terminal implementation of [`LoadingIndicator`].
pub struct TerminalLoading {
    url: String,
    status: LoadingStatus,
    /// Number of lines we last printed (for clearing).
    rendered_lines: usize,
    /// If false, all output is suppressed.
    enabled: bool,
}

impl TerminalLoading {
    /// `url` is shown in the status line.
    pub fn new(url: &str, enabled: bool) -> Self {
        Self {
            url: url.to_string(),
            status: LoadingStatus::Loading,
            rendered_lines: 0,
            enabled,
        }
    }

    pub fn status(&self) -> &LoadingStatus {
        &self.status
    }

    fn render(&mut self) {
        if !self.enabled {
            return;
        }
        Self::clear_lines(self.rendered_lines);
        self.rendered_lines = 0;

        let stderr = io::stderr();
        let mut handle = stderr.lock();
        match &self.status {
            LoadingStatus::Hidden => {}
            LoadingStatus::Loading => {
                let _ = writeln!(
                    handle,
                    "  {} Loading users from {}…",
                    "◌".cyan().bold(),
                    self.url.dimmed()
                );
                self.rendered_lines = 1;
            }
            LoadingStatus::Failed(reason) => {
                // Left on screen; never cleared.
                let _ = writeln!(handle, "  {} {}", "✖".red().bold(), reason.red());
            }
        }
        let _ = handle.flush();
    }

    /// Move cursor up and clear `n` lines.
    fn clear_lines(n: usize) {
        if n == 0 {
            return;
        }
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        for _ in 0..n {
            let _ = write!(handle, "\x1b[1A\x1b[2K");
        }
        let _ = handle.flush();
    }
}

impl LoadingIndicator for TerminalLoading {
    fn show(&mut self) {
        self.status = LoadingStatus::Loading;
        self.render();
    }

    fn hide(&mut self) {
        self.status = LoadingStatus::Hidden;
        self.render();
    }

    fn show_error(&mut self, message: &str) {
        self.status = LoadingStatus::Failed(message.to_string());
        self.render();
    }

    fn is_visible(&self) -> bool {
        self.status != LoadingStatus::Hidden
    }
}
