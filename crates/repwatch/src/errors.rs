//! Error handling and exit codes.

use repwatch_core::constants::exit_codes;
use repwatch_core::{ClientError, ConfigError};

/// Application-level failures that are not request errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("interrupted")]
    Cancelled,
}

/// Exit code for a failed request.
pub fn handle_error(err: &ClientError) -> i32 {
    match err {
        ClientError::Transport(_) | ClientError::Worker(_) => exit_codes::ERROR_TRANSPORT,
        ClientError::Status { .. } => exit_codes::ERROR_STATUS,
        ClientError::Decode(_) => exit_codes::ERROR_DECODE,
    }
}

/// Exit code for any error reaching `main`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(client) = err.downcast_ref::<ClientError>() {
        handle_error(client)
    } else if err.downcast_ref::<ConfigError>().is_some() {
        exit_codes::ERROR_CONFIG
    } else if let Some(AppError::Cancelled) = err.downcast_ref::<AppError>() {
        exit_codes::ERROR_CANCELED
    } else {
        exit_codes::ERROR_GENERIC
    }
}
