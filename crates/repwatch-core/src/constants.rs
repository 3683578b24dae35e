//! Constants for polling cadence, endpoints and display classes.

use std::time::Duration;

/// Default polling period for the status endpoint.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(150);

/// Default overall timeout applied to every request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout applied to every request.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default server base URL.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Path of the status endpoint.
pub const STATUS_PATH: &str = "/status";

/// Path of the finish endpoint.
pub const FINISH_PATH: &str = "/finish_workout";

/// Maximum accepted body size for a status response.
pub const MAX_STATUS_BODY_BYTES: usize = 64 * 1024;

/// Maximum accepted body size for a finish report response.
pub const MAX_REPORT_BODY_BYTES: usize = 1024 * 1024;

/// Base class always present on the feedback region.
pub const FEEDBACK_BASE_CLASS: &str = "feedback-main";

/// Prefix joined to the server's feedback type.
pub const FEEDBACK_STATUS_PREFIX: &str = "status-";

/// Text of the blocking alert shown when the report cannot be produced.
pub const REPORT_FAILED_ALERT: &str = "Report generation failed.";

/// Rep count shown before the first snapshot arrives.
pub const INITIAL_REPS: &str = "0";

/// Phase label shown before the first snapshot arrives.
pub const INITIAL_PHASE: &str = "INICIANDO";

/// Feedback text shown before the first snapshot arrives.
pub const INITIAL_FEEDBACK: &str = "Aguardando...";

/// Feedback type shown before the first snapshot arrives.
pub const INITIAL_FEEDBACK_TYPE: &str = "INFO";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Network failure or timeout.
    pub const ERROR_TRANSPORT: i32 = 2;
    /// Server answered with a non-OK status.
    pub const ERROR_STATUS: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Server answered with a body that could not be decoded.
    pub const ERROR_DECODE: i32 = 5;
    /// Cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
