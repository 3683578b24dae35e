//! View binding between the client logic and a rendering surface.

use std::collections::VecDeque;

use crate::constants::{INITIAL_FEEDBACK, INITIAL_FEEDBACK_TYPE, INITIAL_PHASE, INITIAL_REPS};
use crate::snapshot::feedback_class;

/// Maximum number of diagnostics kept by [`DisplayState`].
const MAX_DIAGNOSTICS: usize = 500;

/// Rendering surface driven by the poller and the finisher.
///
/// All methods are called from the single rendering thread. A status render
/// is a sequence of `set_reps`, `set_phase`, `set_feedback` followed by
/// `commit`.
pub trait StatusView {
    /// Replace the rep count region.
    fn set_reps(&mut self, reps: &str);

    /// Replace the phase region.
    fn set_phase(&mut self, phase: &str);

    /// Replace the feedback text and its complete class attribute.
    fn set_feedback(&mut self, text: &str, class: &str);

    /// Put `report` in the modal body and make the modal visible.
    fn show_report(&mut self, report: &str);

    /// Present a blocking user-facing notice.
    fn alert(&mut self, message: &str);

    /// Record a diagnostic line.
    fn diagnostic(&mut self, _message: &str) {}

    /// Called once after a complete status render.
    fn commit(&mut self) {}
}

/// Visibility of the report modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Hidden,
    Visible {
        report: String,
    },
}

impl ModalState {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible { .. })
    }

    /// Report text when visible.
    #[must_use]
    pub fn report(&self) -> Option<&str> {
        match self {
            Self::Visible { report } => Some(report),
            Self::Hidden => None,
        }
    }
}

/// In-memory display regions.
///
/// Backs the dashboard and doubles as an inspectable view in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub reps: String,
    pub phase: String,
    pub feedback: String,
    pub feedback_class: String,
    pub modal: ModalState,
    /// Alert awaiting dismissal.
    pub alert: Option<String>,
    /// Number of alerts raised since creation.
    pub alerts_raised: u64,
    /// Number of committed status renders.
    pub renders: u64,
    diagnostics: VecDeque<String>,
}

impl DisplayState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            reps: INITIAL_REPS.to_string(),
            phase: INITIAL_PHASE.to_string(),
            feedback: INITIAL_FEEDBACK.to_string(),
            feedback_class: feedback_class(INITIAL_FEEDBACK_TYPE),
            modal: ModalState::Hidden,
            alert: None,
            alerts_raised: 0,
            renders: 0,
            diagnostics: VecDeque::new(),
        }
    }

    /// Close control of the report modal.
    pub fn close_report(&mut self) {
        self.modal = ModalState::Hidden;
    }

    /// Acknowledge the pending alert.
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Drain diagnostics recorded since the last call.
    pub fn take_diagnostics(&mut self) -> Vec<String> {
        self.diagnostics.drain(..).collect()
    }

    /// Diagnostics not yet drained.
    #[must_use]
    pub fn diagnostics(&self) -> &VecDeque<String> {
        &self.diagnostics
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusView for DisplayState {
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
        self.modal = ModalState::Visible {
            report: report.to_string(),
        };
    }

    fn alert(&mut self, message: &str) {
        self.alert = Some(message.to_string());
        self.alerts_raised += 1;
    }

    fn diagnostic(&mut self, message: &str) {
        if self.diagnostics.len() == MAX_DIAGNOSTICS {
            self.diagnostics.pop_front();
        }
        self.diagnostics.push_back(message.to_string());
    }

    fn commit(&mut self) {
        self.renders += 1;
    }
}
