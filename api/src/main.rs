use prodigy_api::{AppState, app};
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    dotenvy::dotenv().ok();

    let state = AppState::from_env();
    info!("Environment: {}", state.environment);

    // Routes live under /api to match the client's default base URL
    let app = axum::Router::new()
        .nest("/api", app(state))
        .layer(TraceLayer::new_for_http());

    // Start server
    let port = std::env::var("PORT").unwrap_or_else(|_| "7071".to_string());
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    info!("Server running on http://{}", addr);
    info!("API Endpoints:");
    info!("  ANY /api/health     - Health check");
    info!("  ANY /api/getData    - Fetch sample data");
    info!("  ANY /api/createData - Echo a record with generated fields");

    axum::serve(listener, app).await.unwrap();
}
