use std::time::Duration;

use sqlx::sqlite::SqlitePoolOptions;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use villa_api::config::AppConfig;
use villa_api::controllers;
use villa_api::repository::VillaRepository;
use villa_api::state::AppState;
use villa_data::SqlxRepository;

/// Initialise the global `tracing` subscriber with a standard `fmt` layer.
///
/// Respects the `RUST_LOG` environment variable. Falls back to
/// `info,tower_http=debug` when `RUST_LOG` is not set.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".parse().unwrap()),
        )
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let config = AppConfig::load();

    let pool = SqlitePoolOptions::new()
        .connect(&config.database_url)
        .await
        .expect("failed to connect to the database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run database migrations");
    tracing::info!("database migrations applied");

    let state = AppState {
        villas: VillaRepository::new(SqlxRepository::new(pool)),
    };

    let app = controllers::router()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("failed to bind listen address");
    tracing::info!(addr = %config.bind_addr, "villa api listening");

    axum::serve(listener, app).await.expect("server error");
}
