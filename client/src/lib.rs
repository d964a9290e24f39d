pub mod api;
pub mod config;
pub mod error;
pub mod session;
pub mod view;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use session::{Route, Session};
pub use view::{FetchState, HomeView};
