use anyhow::Result;
use prodigy_client::{
    ApiClient, ClientConfig, HomeView, Route, Session,
    session::FileTokenStore,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    info!("API base URL: {}", config.base_url);

    let token_dir = std::env::var("PRODIGY_TOKEN_DIR").unwrap_or_else(|_| ".prodigy".to_string());
    let session = Arc::new(Session::new(Arc::new(FileTokenStore::new(token_dir))));
    let client = ApiClient::new(&config, session.clone())?;

    let mut view = HomeView::new(client);
    view.mount().await;
    println!("{}", view.render());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("\n[Enter] refresh, q quit");
    while let Some(line) = lines.next_line().await? {
        if line.trim() == "q" {
            break;
        }

        view.refresh().await;
        println!("{}", view.render());

        if session.route() == Route::Login {
            println!("Session expired, please log in again.");
            break;
        }
        println!("\n[Enter] refresh, q quit");
    }

    Ok(())
}
