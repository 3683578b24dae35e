//! Status snapshot and finish report payloads.

use serde::{Deserialize, Serialize};

use crate::constants::{FEEDBACK_BASE_CLASS, FEEDBACK_STATUS_PREFIX};
use crate::error::ClientError;

/// One status payload fetched from `/status`.
///
/// Extra fields sent by the server are ignored. `feedback_type` is an open
/// string owned by the server and is never validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Current repetition count.
    pub reps: u64,
    /// Movement phase label.
    pub phase: String,
    /// Human-readable posture feedback.
    pub feedback: String,
    /// Classification tag used to select a display style.
    pub feedback_type: String,
}

impl StatusSnapshot {
    /// Decode a snapshot from a JSON body.
    pub fn from_json(body: &[u8]) -> Result<Self, ClientError> {
        serde_json::from_slice(body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Rep count as display text.
    #[must_use]
    pub fn reps_text(&self) -> String {
        self.reps.to_string()
    }

    /// Complete class attribute for the feedback region.
    #[must_use]
    pub fn feedback_class(&self) -> String {
        feedback_class(&self.feedback_type)
    }
}

/// End-of-session report fetched from `/finish_workout`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishReport {
    /// Opaque report text, displayed verbatim.
    pub report: String,
}

impl FinishReport {
    /// Decode a report from a JSON body.
    pub fn from_json(body: &[u8]) -> Result<Self, ClientError> {
        serde_json::from_slice(body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// Build the feedback region's class attribute from a feedback type.
///
/// The type is joined verbatim, so unknown or empty tags still produce a
/// well-formed attribute.
#[must_use]
pub fn feedback_class(feedback_type: &str) -> String {
    format!("{FEEDBACK_BASE_CLASS} {FEEDBACK_STATUS_PREFIX}{feedback_type}")
}

/// Extract the feedback type back out of a class attribute.
///
/// Returns `None` when the attribute was not produced by [`feedback_class`].
#[must_use]
pub fn feedback_type_of(class: &str) -> Option<&str> {
    class
        .strip_prefix(FEEDBACK_BASE_CLASS)?
        .strip_prefix(' ')?
        .strip_prefix(FEEDBACK_STATUS_PREFIX)
}
