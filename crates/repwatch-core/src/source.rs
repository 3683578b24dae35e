//! Abstraction over where status and reports come from.

use crate::error::ClientError;
use crate::snapshot::{FinishReport, StatusSnapshot};

/// A server that can be asked for the current status and the final report.
///
/// Implementations block the calling thread for the duration of the request
/// and must be safe to call from several threads at once.
pub trait StatusSource: Send + Sync {
    /// Fetch one status snapshot.
    fn fetch_status(&self) -> Result<StatusSnapshot, ClientError>;

    /// Fetch the end-of-session report.
    fn fetch_report(&self) -> Result<FinishReport, ClientError>;

    /// Short description used in logs and headers.
    fn describe(&self) -> String {
        String::from("status source")
    }
}
