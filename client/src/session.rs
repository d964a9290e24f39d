use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
    sync::{Arc, Mutex},
};
use tracing::warn;

/// Fixed key the bearer token is stored under.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Client-local persistent key/value storage.
pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store, used in tests.
#[derive(Default)]
pub struct MemoryTokenStore {
    values: Mutex<HashMap<String, String>>,
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
        }
    }
}

/// File-backed store: one file per key under a local directory.
pub struct FileTokenStore {
    dir: PathBuf,
}

impl FileTokenStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path(key))
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn set(&self, key: &str, value: &str) {
        let result = fs::create_dir_all(&self.dir).and_then(|_| fs::write(self.path(key), value));
        if let Err(e) = result {
            warn!("Failed to persist {}: {}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        let _ = fs::remove_file(self.path(key));
    }
}

/// Where the client is currently navigated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
}

/// Explicit session context passed to the request layer instead of a
/// process-wide token singleton, so interceptor behavior stays testable.
pub struct Session {
    store: Arc<dyn TokenStore>,
    route: Mutex<Route>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self {
            store,
            route: Mutex::new(Route::Home),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(AUTH_TOKEN_KEY)
    }

    pub fn set_token(&self, token: &str) {
        self.store.set(AUTH_TOKEN_KEY, token);
    }

    pub fn clear_token(&self) {
        self.store.remove(AUTH_TOKEN_KEY);
    }

    pub fn navigate(&self, route: Route) {
        if let Ok(mut current) = self.route.lock() {
            *current = route;
        }
    }

    pub fn route(&self) -> Route {
        self.route.lock().map(|route| *route).unwrap_or(Route::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn memory_store_round_trips_values() {
        let store = MemoryTokenStore::default();
        assert_eq!(store.get(AUTH_TOKEN_KEY), None);

        store.set(AUTH_TOKEN_KEY, "tok-1");
        assert_eq!(store.get(AUTH_TOKEN_KEY), Some("tok-1".to_string()));

        store.remove(AUTH_TOKEN_KEY);
        assert_eq!(store.get(AUTH_TOKEN_KEY), None);
    }

    #[test]
    fn file_store_persists_and_clears() {
        let mut dir = std::env::temp_dir();
        dir.push(format!(
            "prodigy-client-test-{}-{}",
            std::process::id(),
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ));
        let store = FileTokenStore::new(&dir);

        store.set(AUTH_TOKEN_KEY, "tok-2");
        assert_eq!(store.get(AUTH_TOKEN_KEY), Some("tok-2".to_string()));

        store.remove(AUTH_TOKEN_KEY);
        assert_eq!(store.get(AUTH_TOKEN_KEY), None);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn session_tracks_token_and_route() {
        let session = Session::new(Arc::new(MemoryTokenStore::default()));
        assert_eq!(session.token(), None);
        assert_eq!(session.route(), Route::Home);

        session.set_token("tok-3");
        assert_eq!(session.token(), Some("tok-3".to_string()));

        session.clear_token();
        session.navigate(Route::Login);
        assert_eq!(session.token(), None);
        assert_eq!(session.route(), Route::Login);
    }
}
