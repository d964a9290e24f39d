use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:7071/api";

/// Fixed request timeout; a request that exceeds it fails like any other
/// transport error, with no retry.
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(10_000);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Base URL from `API_BASE_URL`, default local backend.
    pub fn from_env() -> Self {
        Self::new(std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
