//! Plan service error types

use thiserror::Error;

/// Errors that can occur while requesting a plan
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Request timed out")]
    Timeout,

    #[error("Service error {status}: {message}")]
    Server { status: u16, message: String },

    #[error("Invalid response: {0}")]
    Payload(String),
}

impl PlanError {
    /// Classify a transport error, separating timeouts from other failures
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PlanError::Timeout
        } else {
            PlanError::Transport(err)
        }
    }

    /// Short category name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            PlanError::Transport(_) => "transport",
            PlanError::Timeout => "timeout",
            PlanError::Server { .. } => "server",
            PlanError::Payload(_) => "payload",
        }
    }
}

impl From<reqwest::Error> for PlanError {
    fn from(err: reqwest::Error) -> Self {
        PlanError::from_reqwest(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_server_error() {
        let err = PlanError::Server {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Service error 500: boom");
        assert_eq!(err.kind(), "server");
    }

    #[test]
    fn test_display_payload_error() {
        let err = PlanError::Payload("missing plan".to_string());
        assert_eq!(err.to_string(), "Invalid response: missing plan");
        assert_eq!(err.kind(), "payload");
    }

    #[test]
    fn test_timeout_kind() {
        assert_eq!(PlanError::Timeout.kind(), "timeout");
        assert_eq!(PlanError::Timeout.to_string(), "Request timed out");
    }
}
