//! Line-oriented status view.

use std::io::{self, Write};

use tracing::debug;

use repwatch_core::StatusView;

use crate::output::format_status_line;
use crate::ui::{print_error, use_color};

/// Prints one line per rendered snapshot, skipping unchanged renders.
pub struct CliStatusView<W: Write = io::Stdout> {
    out: W,
    quiet: bool,
    color: bool,
    reps: String,
    phase: String,
    feedback: String,
    feedback_class: String,
    last_line: Option<String>,
    alerts: u64,
}

impl CliStatusView<io::Stdout> {
    /// View writing to stdout.
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self::with_writer(io::stdout(), quiet, use_color())
    }
}

impl<W: Write> CliStatusView<W> {
    /// View writing to any sink.
    pub fn with_writer(out: W, quiet: bool, color: bool) -> Self {
        Self {
            out,
            quiet,
            color,
            reps: String::new(),
            phase: String::new(),
            feedback: String::new(),
            feedback_class: String::new(),
            last_line: None,
            alerts: 0,
        }
    }

    /// Number of alerts printed.
    #[must_use]
    pub fn alerts(&self) -> u64 {
        self.alerts
    }

    /// Consume the view and return its sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}").and_then(|()| self.out.flush()) {
            debug!(error = %e, "status output failed");
        }
    }
}

impl<W: Write> StatusView for CliStatusView<W> {
    fn set_reps(&mut self, reps: &str) {
        reps.clone_into(&mut self.reps);
    }

    fn set_phase(&mut self, phase: &str) {
        phase.clone_into(&mut self.phase);
    }

    fn set_feedback(&mut self, text: &str, class: &str) {
        text.clone_into(&mut self.feedback);
        class.clone_into(&mut self.feedback_class);
    }

    fn show_report(&mut self, report: &str) {
        if !self.quiet {
            self.write_line("=== Workout report ===");
        }
        self.write_line(report);
    }

    fn alert(&mut self, message: &str) {
        self.alerts += 1;
        print_error(message);
    }

    fn commit(&mut self) {
        let line = if self.quiet {
            self.reps.clone()
        } else {
            format_status_line(
                &self.reps,
                &self.phase,
                &self.feedback,
                &self.feedback_class,
                self.color,
            )
        };
        if self.last_line.as_deref() == Some(line.as_str()) {
            return;
        }
        self.write_line(&line);
        self.last_line = Some(line);
    }
}
