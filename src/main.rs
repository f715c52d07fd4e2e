//! CineVault Server — movie catalog CRUD backend
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use cinevault_core::config::AppConfig;
use cinevault_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("CINEVAULT_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting CineVault v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = cinevault_database::connection::DatabasePool::connect(&config.database)
        .await?
        .into_pool();

    cinevault_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Media host client ────────────────────────────────
    let media = Arc::new(cinevault_media::MediaClient::new(&config.media)?);
    tracing::info!(upload_url = %config.media.upload_url, "Media client ready");

    // ── Step 3: Repositories ─────────────────────────────────────
    let movie_repo = Arc::new(
        cinevault_database::repositories::movie::MovieRepository::new(db_pool.clone()),
    );
    let actor_repo = Arc::new(
        cinevault_database::repositories::actor::ActorRepository::new(db_pool.clone()),
    );
    let director_repo = Arc::new(
        cinevault_database::repositories::director::DirectorRepository::new(db_pool.clone()),
    );
    let genre_repo = Arc::new(
        cinevault_database::repositories::genre::GenreRepository::new(db_pool.clone()),
    );

    // ── Step 4: Build and start HTTP server ──────────────────────
    let app_state = cinevault_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        media,
        movie_repo,
        actor_repo,
        director_repo,
        genre_repo,
    };

    let app = cinevault_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("CineVault server listening on {addr}");

    // ── Step 5: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("CineVault server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
