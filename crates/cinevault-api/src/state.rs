//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use cinevault_core::config::AppConfig;
use cinevault_database::repositories::actor::ActorRepository;
use cinevault_database::repositories::director::DirectorRepository;
use cinevault_database::repositories::genre::GenreRepository;
use cinevault_database::repositories::movie::MovieRepository;
use cinevault_media::MediaClient;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Everything is
/// constructed once at startup and injected here; there is no ambient
/// global state. All fields are cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Media host upload client.
    pub media: Arc<MediaClient>,
    /// Movie repository.
    pub movie_repo: Arc<MovieRepository>,
    /// Actor repository.
    pub actor_repo: Arc<ActorRepository>,
    /// Director repository.
    pub director_repo: Arc<DirectorRepository>,
    /// Genre repository.
    pub genre_repo: Arc<GenreRepository>,
}
