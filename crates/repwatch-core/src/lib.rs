//! # repwatch-core
//!
//! Core library for the repwatch exercise-tracker client.
//! Holds the status data model, request sequencing, the view binding
//! that every rendering surface implements, and the HTTP status source.

pub mod cancel;
pub mod constants;
pub mod error;
pub mod http;
pub mod sequence;
pub mod snapshot;
pub mod source;
pub mod view;

// Re-exports
pub use cancel::CancellationToken;
pub use constants::{
    exit_codes, DEFAULT_POLL_INTERVAL, DEFAULT_REQUEST_TIMEOUT, FEEDBACK_BASE_CLASS,
    FEEDBACK_STATUS_PREFIX, REPORT_FAILED_ALERT,
};
pub use error::{ClientError, ConfigError};
pub use http::{HttpStatusSource, HttpTimeouts};
pub use sequence::{RequestSequencer, SequenceGuard};
pub use snapshot::{feedback_class, FinishReport, StatusSnapshot};
pub use source::StatusSource;
pub use view::{DisplayState, ModalState, StatusView};
