//! Route definitions for the CineVault RPC surface.
//!
//! All routes are organized by entity and mounted under `/api`. Every
//! operation is a JSON `POST` mirroring the RPC request messages; the
//! router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(movie_routes())
        .merge(actor_routes())
        .merge(director_routes())
        .merge(genre_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Movie service: insert, update, list, delete, get-by-id
fn movie_routes() -> Router<AppState> {
    Router::new()
        .route("/movies/insert", post(handlers::movie::insert))
        .route("/movies/update", post(handlers::movie::update))
        .route("/movies/list", post(handlers::movie::list))
        .route("/movies/delete", post(handlers::movie::delete))
        .route("/movies/get-by-id", post(handlers::movie::get_by_id))
}

/// Actor service: insert, update, list, delete
fn actor_routes() -> Router<AppState> {
    Router::new()
        .route("/actors/insert", post(handlers::actor::insert))
        .route("/actors/update", post(handlers::actor::update))
        .route("/actors/list", post(handlers::actor::list))
        .route("/actors/delete", post(handlers::actor::delete))
}

/// Director service: insert, update, list, delete
fn director_routes() -> Router<AppState> {
    Router::new()
        .route("/directors/insert", post(handlers::director::insert))
        .route("/directors/update", post(handlers::director::update))
        .route("/directors/list", post(handlers::director::list))
        .route("/directors/delete", post(handlers::director::delete))
}

/// Genre service: insert, update, list, delete
fn genre_routes() -> Router<AppState> {
    Router::new()
        .route("/genres/insert", post(handlers::genre::insert))
        .route("/genres/update", post(handlers::genre::update))
        .route("/genres/list", post(handlers::genre::list))
        .route("/genres/delete", post(handlers::genre::delete))
}

/// Health check endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}
