//! # repwatch-cli
//!
//! Plain terminal output for the status feed, report printing, and shell
//! completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::CliStatusView;
