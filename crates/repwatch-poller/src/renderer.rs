//! Applies fetch outcomes to a [`StatusView`].
//!
//! The renderer runs on the rendering thread only. It owns the
//! [`SequenceGuard`] that keeps a slow response from overwriting the
//! display with data older than what is already shown.

use tracing::{debug, error, info, warn};

use repwatch_core::{
    ClientError, FinishReport, SequenceGuard, StatusSnapshot, StatusView, REPORT_FAILED_ALERT,
};

use crate::observer::PollEvent;

/// What happened to one fetch outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Written to the view.
    Applied,
    /// Discarded because a newer snapshot is already displayed.
    Stale,
    /// The fetch failed; the display was left as it was.
    Failed,
}

/// Running counters, shown in the dashboard header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub applied: u64,
    pub stale: u64,
    pub failed: u64,
    pub reports_shown: u64,
    pub reports_failed: u64,
}

/// Sequence-guarded applier of poll events.
#[derive(Debug, Default)]
pub struct StatusRenderer {
    guard: SequenceGuard,
    stats: RenderStats,
}

impl StatusRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters so far.
    #[must_use]
    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Sequence number of the snapshot on display (0 if none).
    #[must_use]
    pub fn last_applied(&self) -> u64 {
        self.guard.last_applied()
    }

    /// Apply any poll event.
    pub fn apply<V: StatusView + ?Sized>(
        &mut self,
        view: &mut V,
        event: PollEvent,
    ) -> RenderOutcome {
        match event {
            PollEvent::Status { seq, outcome } => self.apply_status(view, seq, outcome),
            PollEvent::Report { outcome } => self.apply_report(view, outcome),
        }
    }

    /// Apply the outcome of status request `seq`.
    pub fn apply_status<V: StatusView + ?Sized>(
        &mut self,
        view: &mut V,
        seq: u64,
        outcome: Result<StatusSnapshot, ClientError>,
    ) -> RenderOutcome {
        match outcome {
            Ok(snapshot) => {
                if !self.guard.admit(seq) {
                    debug!(
                        seq,
                        last_applied = self.guard.last_applied(),
                        "discarding superseded status response"
                    );
                    self.stats.stale += 1;
                    return RenderOutcome::Stale;
                }
                render_snapshot(view, &snapshot);
                self.stats.applied += 1;
                RenderOutcome::Applied
            }
            Err(err) => {
                warn!(seq, error = %err, "status poll failed");
                view.diagnostic(&format!("[WARN] status poll #{seq} failed: {err}"));
                self.stats.failed += 1;
                RenderOutcome::Failed
            }
        }
    }

    /// Apply the outcome of a finish request.
    pub fn apply_report<V: StatusView + ?Sized>(
        &mut self,
        view: &mut V,
        outcome: Result<FinishReport, ClientError>,
    ) -> RenderOutcome {
        match outcome {
            Ok(report) => {
                info!(bytes = report.report.len(), "showing workout report");
                view.show_report(&report.report);
                self.stats.reports_shown += 1;
                RenderOutcome::Applied
            }
            Err(err) => {
                error!(error = %err, "finishing workout failed");
                view.diagnostic(&format!("[ERROR] finish workout failed: {err}"));
                view.alert(REPORT_FAILED_ALERT);
                self.stats.reports_failed += 1;
                RenderOutcome::Failed
            }
        }
    }
}

/// Write all four regions from one snapshot.
fn render_snapshot<V: StatusView + ?Sized>(view: &mut V, snapshot: &StatusSnapshot) {
    view.set_reps(&snapshot.reps_text());
    view.set_phase(&snapshot.phase);
    view.set_feedback(&snapshot.feedback, &snapshot.feedback_class());
    view.commit();
}
