use crate::api::{ApiClient, SampleData};
use tracing::error;

/// Fetch lifecycle of the page: idle -> loading -> (success | error),
/// re-enterable via the manual refresh trigger.
#[derive(Debug, Clone)]
pub enum FetchState {
    Idle,
    Loading,
    Success(SampleData),
    Error,
}

pub struct HomeView {
    client: ApiClient,
    state: FetchState,
}

impl HomeView {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: FetchState::Idle,
        }
    }

    /// Automatic fetch on mount.
    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    /// Manual refresh trigger; disabled while a fetch is in flight. Error
    /// detail is only logged, never rendered.
    pub async fn refresh(&mut self) {
        if self.is_loading() {
            return;
        }
        self.state = FetchState::Loading;
        self.state = match self.client.get_data().await {
            Ok(data) => FetchState::Success(data),
            Err(e) => {
                error!("Error: {}", e);
                FetchState::Error
            }
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FetchState::Loading)
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Render the page text for the current fetch state.
    pub fn render(&self) -> String {
        let mut lines = vec!["Azure Function Data".to_string()];
        match &self.state {
            FetchState::Idle => {}
            FetchState::Loading => lines.push("Loading...".to_string()),
            FetchState::Error => lines.push("Failed to fetch data".to_string()),
            FetchState::Success(data) => {
                lines.push(format!("Message: {}", data.message));
                lines.push(format!("Timestamp: {}", data.timestamp));
            }
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::session::{MemoryTokenStore, Session};
    use std::sync::Arc;

    fn view() -> HomeView {
        let session = Arc::new(Session::new(Arc::new(MemoryTokenStore::default())));
        let client = ApiClient::new(&ClientConfig::default(), session).unwrap();
        HomeView::new(client)
    }

    #[test]
    fn renders_nothing_extra_when_idle() {
        let view = view();
        assert_eq!(view.render(), "Azure Function Data");
        assert!(!view.is_loading());
    }

    #[test]
    fn renders_loading_indicator() {
        let mut view = view();
        view.state = FetchState::Loading;
        assert!(view.is_loading());
        assert!(view.render().contains("Loading..."));
    }

    #[test]
    fn renders_static_error_message() {
        let mut view = view();
        view.state = FetchState::Error;
        assert!(view.render().contains("Failed to fetch data"));
    }

    #[test]
    fn renders_message_and_timestamp_on_success() {
        let mut view = view();
        view.state = FetchState::Success(SampleData {
            message: "Hello from Azure Functions!".to_string(),
            timestamp: "2026-08-25T00:00:00.000Z".to_string(),
            environment: "local".to_string(),
            request_id: "r-1".to_string(),
        });
        let rendered = view.render();
        assert!(rendered.contains("Message: Hello from Azure Functions!"));
        assert!(rendered.contains("Timestamp: 2026-08-25T00:00:00.000Z"));
    }
}
