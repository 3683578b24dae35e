//! TUI message types (Elm Messages).

use repwatch_core::{ClientError, FinishReport, StatusSnapshot};

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// A status request completed.
    Status {
        seq: u64,
        outcome: Result<StatusSnapshot, ClientError>,
    },
    /// A finish request completed.
    Report {
        outcome: Result<FinishReport, ClientError>,
    },
    /// Log message.
    Log(String),
    /// Quit the application.
    Quit,
    /// Tick event for periodic updates.
    Tick,
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Key press event forwarded from the event loop.
    KeyPress(crate::keymap::KeyAction),
    /// Error message.
    Error(String),
}
