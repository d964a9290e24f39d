use reqwest::StatusCode;
use thiserror::Error;

/// Request-layer errors. Every failure is terminal for its request; there
/// is no retry policy anywhere in the client.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure, including the fixed request timeout.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status}")]
    Status {
        /// The HTTP status the server responded with.
        status: StatusCode,
    },
}

impl ClientError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Status { status } if *status == StatusCode::UNAUTHORIZED)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Http(e) if e.is_timeout())
    }
}
