//! # repwatch-tui
//!
//! Interactive TUI dashboard using ratatui with Elm architecture.

pub mod bridge;
pub mod footer;
pub mod header;
pub mod keymap;
pub mod logs;
pub mod messages;
pub mod model;
pub mod report;
pub mod status;
pub mod styles;

pub use bridge::TuiBridgeObserver;
pub use logs::LogScrollState;
pub use messages::TuiMessage;
pub use model::TuiApp;
