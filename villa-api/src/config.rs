use std::env;

/// Application configuration resolved from the environment.
///
/// Resolution order (lowest to highest priority):
/// 1. built-in defaults
/// 2. `.env` file (never overwrites already-set environment variables)
/// 3. environment variables (`APP_DATABASE_URL`, `APP_BIND_ADDR`)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
}

impl AppConfig {
    /// Load configuration once, at startup.
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            database_url: env::var("APP_DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://villas.db?mode=rwc".to_string()),
            bind_addr: env::var("APP_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
        }
    }
}
