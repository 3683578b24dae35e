//! Error types shared across the client.

/// Failure of a single request to the tracker server.
///
/// Cloneable so a fetch outcome can be forwarded to several observers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// Connection, DNS, TLS or timeout failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// Server answered with a non-OK status.
    #[error("server returned HTTP {code}: {body}")]
    Status { code: u16, body: String },

    /// Body could not be read or decoded.
    #[error("malformed response body: {0}")]
    Decode(String),

    /// The fetch could not be scheduled.
    #[error("fetch worker failed: {0}")]
    Worker(String),
}

impl ClientError {
    /// Whether the failure happened before any response was received.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Worker(_))
    }
}

/// Invalid client configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid server URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid duration '{0}'")]
    InvalidDuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display() {
        let err = ClientError::Status {
            code: 503,
            body: "busy".into(),
        };
        assert_eq!(err.to_string(), "server returned HTTP 503: busy");
        assert!(!err.is_transport());
    }

    #[test]
    fn transport_classification() {
        assert!(ClientError::Transport("refused".into()).is_transport());
        assert!(ClientError::Worker("spawn".into()).is_transport());
        assert!(!ClientError::Decode("eof".into()).is_transport());
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::InvalidUrl {
            url: "ftp://x".into(),
            reason: "unsupported scheme".into(),
        };
        assert!(err.to_string().contains("ftp://x"));
        assert_eq!(
            ConfigError::InvalidDuration("5x".into()).to_string(),
            "invalid duration '5x'"
        );
    }
}
