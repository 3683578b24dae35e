//! repwatch library: application logic for the repetition tracker client.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
