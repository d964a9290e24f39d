pub mod dto;
pub mod errors;
pub mod routes;
pub mod states;

pub use states::AppState;

use axum::{
    Router,
    http::{Method, header},
    routing::any,
};
use tower_http::cors::{Any, CorsLayer};

/// Build the API router.
///
/// Routes are unprefixed here so tests can drive them directly; the binary
/// nests the router under `/api`. Every route accepts any HTTP method.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/health", any(routes::health::health_check))
        .route("/getData", any(routes::data::get_data))
        .route("/createData", any(routes::data::create_data))
        .with_state(state)
        .layer(cors)
}
