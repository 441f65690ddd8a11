//! Errors raised while talking to the asset service

use thiserror::Error;

/// Failure of a single call to the asset service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Connection, DNS, TLS or body transfer failure
    #[error("request failed: {0}")]
    Transport(String),

    /// The client-side request timeout elapsed
    #[error("request timed out")]
    Timeout,

    /// The service answered with a non-2xx status
    #[error("service responded with {status}: {body}")]
    Status { status: u16, body: String },
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ServiceError::Timeout
        } else {
            ServiceError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_includes_code_and_body() {
        let err = ServiceError::Status {
            status: 400,
            body: "bad price".to_string(),
        };
        assert_eq!(err.to_string(), "service responded with 400: bad price");
    }

    #[test]
    fn test_timeout_display() {
        assert_eq!(ServiceError::Timeout.to_string(), "request timed out");
    }
}
