use std::time::Instant;

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// Read-only per-process facts. Handlers never share mutable state; every
/// invocation's working data is local to that invocation.
#[derive(Clone)]
pub struct AppState {
    pub environment: String,
    pub version: String,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: Instant::now(),
        }
    }

    /// Deployment environment name from `APP_ENVIRONMENT`, default `"local"`.
    pub fn from_env() -> Self {
        Self::new(std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".to_string()))
    }
}
