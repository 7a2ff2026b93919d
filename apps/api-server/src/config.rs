//! Application configuration loaded from environment variables.

use std::env;

use dashboard_infra::database::DatabaseConfig;

/// Application configuration.
///
/// Every value has a documented default so a bare environment still boots;
/// the database itself must still be reachable at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub jwt_secret: String,
    pub operator_username: String,
    pub operator_password: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Defaults: `HOST=127.0.0.1`, `PORT=3000`,
    /// `DATABASE_URL=postgres://localhost/post_dashboard`,
    /// `DB_MAX_CONNECTIONS=20`, `DB_MIN_CONNECTIONS=2`,
    /// `JWT_SECRET=fallback_secret`, `DASHBOARD_USERNAME=jorge`,
    /// `DASHBOARD_PASSWORD=dashboard123`.
    pub fn from_env() -> Self {
        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set. Using the fallback secret; set it for production use.");
            "fallback_secret".to_string()
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgres://localhost/post_dashboard".to_string()),
                max_connections: env::var("DB_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(20),
                min_connections: env::var("DB_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(2),
            },
            jwt_secret,
            operator_username: env::var("DASHBOARD_USERNAME").unwrap_or_else(|_| "jorge".to_string()),
            operator_password: env::var("DASHBOARD_PASSWORD")
                .unwrap_or_else(|_| "dashboard123".to_string()),
        }
    }
}
