//! Process bootstrap: logging, database pool, seeding and the HTTP listener.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::{info, warn, Level};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

use crate::adapters::http::{booking_router, BookingAppState};
use crate::adapters::postgres::{PostgresClubReader, PostgresClubRepository, PostgresClubSchema};
use crate::application::handlers::club::{SeedClubCommand, SeedClubHandler};
use crate::config::{AppConfig, ConfigError, DatabaseConfig, ServerConfig, ValidationError};
use crate::domain::foundation::DomainError;
use crate::ports::{ClubReader, ClubSchema};

/// Anything that stops the process before or while serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    #[error("Logging setup failed: {0}")]
    Logging(#[from] TryInitError),

    #[error("Database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database unavailable: {0}")]
    Unavailable(DomainError),

    #[error("Seeding failed: {0}")]
    Seed(DomainError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. Production logs are JSON.
pub fn init_tracing(config: &ServerConfig) -> Result<(), StartupError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .with(env_filter)
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_file(true)
                    .with_line_number(true)
                    .with_target(false),
            )
            .with(env_filter)
            .try_init()?;
    }

    Ok(())
}

/// Open the PostgreSQL connection pool.
pub async fn connect_pool(config: &DatabaseConfig) -> Result<PgPool, StartupError> {
    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect(&config.url)
        .await?;
    Ok(pool)
}

/// Build the HTTP application around a club reader.
pub fn build_router(reader: Arc<dyn ClubReader>, config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let middleware = ServiceBuilder::new()
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(cors);

    booking_router()
        .with_state(BookingAppState::new(reader))
        .layer(middleware)
}

/// Connect, seed the club, then serve until a shutdown signal arrives.
///
/// Seeding drops and recreates every table, so each start serves a fresh club.
pub async fn run(config: AppConfig) -> Result<(), StartupError> {
    config.validate()?;
    let addr = config.server.socket_addr()?;

    let pool = connect_pool(&config.database).await?;

    let schema = Arc::new(PostgresClubSchema::new(pool.clone()));
    schema.ping().await.map_err(StartupError::Unavailable)?;
    info!("Connected to database");

    let repository = Arc::new(PostgresClubRepository::new(pool.clone()));
    let seeded = SeedClubHandler::new(schema, repository)
        .handle(SeedClubCommand::default())
        .await
        .map_err(StartupError::Seed)?;
    info!(
        facilities = seeded.facilities.len(),
        members = seeded.members.len(),
        bookings = seeded.bookings.len(),
        "Club seeded"
    );

    let reader: Arc<dyn ClubReader> = Arc::new(PostgresClubReader::new(pool));
    let app = build_router(reader, &config.server);

    let listener = TcpListener::bind(addr).await?;
    info!("Listening on port: {}", addr.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryClubStore;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn build_router_serves_bookings_with_cors() {
        let store = InMemoryClubStore::new();
        let app = build_router(Arc::new(store), &ServerConfig::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/bookings")
                    .header(header::ORIGIN, "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }

    #[test]
    fn startup_error_wraps_seed_failure() {
        let err = StartupError::Seed(DomainError::new(
            crate::domain::foundation::ErrorCode::Conflict,
            "duplicate",
        ));
        assert_eq!(err.to_string(), "Seeding failed: [CONFLICT] duplicate");
    }

    #[tokio::test]
    async fn run_rejects_invalid_config_before_connecting() {
        let mut config = AppConfig::default();
        config.server.port = 0;

        let result = run(config).await;
        assert!(matches!(result, Err(StartupError::InvalidConfig(_))));
    }
}
