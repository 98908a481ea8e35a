//! Nyaya server binary.
//!
//! Loads configuration, connects to PostgreSQL, wires the adapters into
//! the application handlers, and serves the HTTP API.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use nyaya::adapters::auth::JwtTokenVerifier;
use nyaya::adapters::http::{app_router, AuthState, ChatHandlers};
use nyaya::adapters::postgres::{PgChatTurnRepository, PgProfileReader};
use nyaya::application::handlers::{GetChatHistoryHandler, ProcessMessageHandler};
use nyaya::config::AppConfig;
use nyaya::ports::{ChatTurnRepository, ProfileReader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;
    tracing::info!("connected to database");

    let profiles: Arc<dyn ProfileReader> = Arc::new(PgProfileReader::new(pool.clone()));
    let turns: Arc<dyn ChatTurnRepository> = Arc::new(PgChatTurnRepository::new(pool));

    let handlers = ChatHandlers {
        process_message: Arc::new(ProcessMessageHandler::new(
            Arc::clone(&profiles),
            Arc::clone(&turns),
        )),
        get_history: Arc::new(GetChatHistoryHandler::new(profiles, turns)),
    };
    let auth: AuthState = Arc::new(JwtTokenVerifier::new(&config.auth.jwt_secret));

    let app = app_router(
        handlers,
        auth,
        &config.server.cors_origins_list(),
        Duration::from_secs(config.server.request_timeout_secs),
    );

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
