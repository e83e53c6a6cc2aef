//! # Snippetbox Server
//!
//! This is the main entry point for the snippet sharing server.

use snippetbox::{db, routes, AppState, Config};
use std::net::SocketAddr;
use tower_sessions::session_store::ExpiredDeletion;
use tower_sessions_sqlx_store::SqliteStore;
// Structured logging setup
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main application entry point
///
/// This function:
/// 1. Sets up logging
/// 2. Loads configuration from environment variables
/// 3. Opens the database and applies migrations
/// 4. Prepares the session store and its cleanup task
/// 5. Builds the router and starts the HTTP server
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing/logging system
    // Default: info level for most crates, debug level for our app
    // Can be overridden with RUST_LOG environment variable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,snippetbox=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment variables and .env file
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded: {:?}", config);

    // Create the connection pool and bring the schema up to date
    let pool = db::connect(&config.database_url).await?;

    // Configure session store using SQLite
    // Only the session id lives in the cookie; session data stays server-side
    let session_store = SqliteStore::new(pool.clone());
    session_store.migrate().await?;

    // Expired sessions are never read again, but their rows stay until removed.
    // Sweep them every 10 minutes.
    let cleanup_store = session_store.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(600));
        loop {
            interval.tick().await;
            tracing::debug!("Running expired session cleanup");
            if let Err(e) = cleanup_store.delete_expired().await {
                tracing::error!("Session cleanup failed: {:?}", e);
            }
        }
    });

    let bind_addr = config.bind_address();
    let app_state = AppState::with_sqlite(pool, config);
    let app = routes(app_state, session_store);

    // Start the HTTP server
    tracing::info!("Starting server on {}", bind_addr);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    // Connect info gives the request logger the client's address
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
