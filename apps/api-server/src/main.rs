//! # Post Dashboard API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use dashboard_core::ports::TokenService;
use dashboard_infra::auth::{Argon2PasswordService, CredentialStore, JwtTokenService};
use dashboard_infra::database::{self, PostgresPostRepository};

mod config;
mod handlers;
mod middleware;
mod state;

#[cfg(test)]
mod testing;

use config::AppConfig;
use state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = AppConfig::from_env();

    tracing::info!(
        "Starting post dashboard API on {}:{}",
        config.host,
        config.port
    );

    // The durable store must be reachable at startup; anything else is fatal.
    let db = database::connect(&config.database).await.map_err(|e| {
        tracing::error!("Failed to connect to database: {}", e);
        std::io::Error::other(e)
    })?;

    let credentials = CredentialStore::new(
        config.operator_username.clone(),
        &config.operator_password,
        Box::new(Argon2PasswordService::new()),
    )
    .map_err(|e| {
        tracing::error!("Failed to initialize credential store: {}", e);
        std::io::Error::other(e)
    })?;

    tracing::info!(operator = %credentials.username(), "Credential store initialized");

    let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(&config.jwt_secret));

    let state = AppState {
        posts: Arc::new(PostgresPostRepository::new(db)),
        credentials: Arc::new(credentials),
    };

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(token_service.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,api_server=debug,dashboard_infra=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
