//! CLI output formatting.

use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use repwatch_core::snapshot::feedback_type_of;
use repwatch_poller::RenderStats;

use crate::ui::style_feedback_tag;

/// Format one status line.
///
/// `class` is the feedback region's class attribute; the tag shown is the
/// feedback type recovered from it.
#[must_use]
pub fn format_status_line(
    reps: &str,
    phase: &str,
    feedback: &str,
    class: &str,
    color: bool,
) -> String {
    let kind = feedback_type_of(class).unwrap_or(class);
    let tag = style_feedback_tag(kind).force_styling(color);
    format!("reps {reps} | phase {phase} | {tag} {feedback}")
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// One-line summary of a watch session.
#[must_use]
pub fn format_summary(elapsed: Duration, stats: &RenderStats) -> String {
    format!(
        "watched {} | {} applied, {} stale, {} failed",
        format_duration(elapsed),
        stats.applied,
        stats.stale,
        stats.failed
    )
}

/// Write a report to a file, verbatim.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_report(path: &Path, report: &str) -> io::Result<()> {
    fs::write(path, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_plain() {
        let line = format_status_line("3", "down", "Good", "feedback-main status-CORRETO", false);
        assert_eq!(line, "reps 3 | phase down | [CORRETO] Good");
    }

    #[test]
    fn status_line_foreign_class() {
        let line = format_status_line("0", "idle", "Ready", "custom", false);
        assert_eq!(line, "reps 0 | phase idle | [custom] Ready");
    }

    #[test]
    fn status_line_colored_keeps_text() {
        let line = format_status_line("1", "up", "Ok", "feedback-main status-ATENCAO", true);
        assert_eq!(
            console::strip_ansi_codes(&line),
            "reps 1 | phase up | [ATENCAO] Ok"
        );
    }

    #[test]
    fn duration_formats() {
        assert_eq!(format_duration(Duration::from_millis(150)), "150ms");
        assert_eq!(format_duration(Duration::from_millis(2500)), "2.5s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m30.0s");
    }

    #[test]
    fn summary_counts() {
        let stats = RenderStats {
            applied: 10,
            stale: 2,
            failed: 1,
            ..RenderStats::default()
        };
        assert_eq!(
            format_summary(Duration::from_secs(3), &stats),
            "watched 3.0s | 10 applied, 2 stale, 1 failed"
        );
    }

    #[test]
    fn report_written_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        write_report(&path, "Total reps: 12\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Total reps: 12\n");
    }
}
