//! Movie service handlers.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use cinevault_core::types::envelope::Envelope;
use cinevault_entity::movie::{CreateMovie, UpdateMovie};
use cinevault_media::UploadPreset;

use crate::dto::request::{IdRequest, MovieInput, MovieListRequest};
use crate::dto::response::MovieRecord;
use crate::handlers::resolve_image;
use crate::state::AppState;

/// POST /api/movies/insert
pub async fn insert(
    State(state): State<AppState>,
    Json(req): Json<MovieInput>,
) -> Json<Envelope<MovieRecord>> {
    if let Err(e) = req.validate() {
        return Json(Envelope::failure(400, format!("Invalid movie payload: {e}")));
    }

    let poster = match resolve_image(&state.media, req.poster.as_deref(), &UploadPreset::MOVIE, true)
        .await
    {
        Ok(url) => url,
        Err(e) => return Json(Envelope::from_error(&e, 400)),
    };

    let data = CreateMovie {
        title: req.title,
        synopsis: req.synopsis,
        year: req.year,
        rating: f64::from(req.rating),
        duration: req.duration,
        director_id: req.director_id,
        poster,
        actor_ids: req.actors,
        genre_ids: req.genres,
    };

    match state.movie_repo.insert(&data).await {
        Ok(movie) => Json(Envelope::created(
            "The movie has been created",
            MovieRecord::from(&movie),
        )),
        Err(e) => Json(Envelope::from_error(&e, 400)),
    }
}

/// POST /api/movies/update
pub async fn update(
    State(state): State<AppState>,
    Json(req): Json<MovieInput>,
) -> Json<Envelope<MovieRecord>> {
    if let Err(e) = req.validate() {
        return Json(Envelope::failure(400, format!("Invalid movie payload: {e}")));
    }

    // An already-hosted URL resolves to None here, leaving the stored
    // poster untouched; only fresh inline data replaces it.
    let poster =
        match resolve_image(&state.media, req.poster.as_deref(), &UploadPreset::MOVIE, false).await
        {
            Ok(url) => url,
            Err(e) => return Json(Envelope::from_error(&e, 400)),
        };

    let data = UpdateMovie {
        id: req.id,
        title: req.title,
        synopsis: req.synopsis,
        year: req.year,
        rating: f64::from(req.rating),
        duration: req.duration,
        director_id: req.director_id,
        poster,
    };

    match state.movie_repo.update(&data).await {
        Ok(()) => Json(Envelope::ok_empty("The movie was updated")),
        Err(e) => Json(Envelope::from_error(&e, 400)),
    }
}

/// POST /api/movies/list
///
/// A store failure on the base query answers an internal-error envelope
/// with an empty listing; partial pages are never returned.
pub async fn list(
    State(state): State<AppState>,
    Json(req): Json<MovieListRequest>,
) -> Json<Envelope<Vec<MovieRecord>>> {
    let filter = req.filter_criteria.unwrap_or_default();

    match state.movie_repo.list(&filter, &req.page).await {
        Ok(movies) => {
            let records: Vec<MovieRecord> = movies.iter().map(MovieRecord::from).collect();
            Json(Envelope::ok("Movie listing", records))
        }
        Err(e) => {
            tracing::error!(error = %e, "Movie listing failed");
            let mut envelope = Envelope::from_error(&e, 500);
            envelope.value = Some(Vec::new());
            Json(envelope)
        }
    }
}

/// POST /api/movies/delete
pub async fn delete(
    State(state): State<AppState>,
    Json(req): Json<IdRequest>,
) -> Json<Envelope<MovieRecord>> {
    match state.movie_repo.soft_delete(req.id).await {
        Ok(()) => Json(Envelope::ok_empty("The record was deleted")),
        Err(e) => Json(Envelope::from_error(&e, 400)),
    }
}

/// POST /api/movies/get-by-id
pub async fn get_by_id(
    State(state): State<AppState>,
    Json(req): Json<IdRequest>,
) -> Json<Envelope<MovieRecord>> {
    match state.movie_repo.find_by_id(req.id).await {
        Ok(Some(movie)) => Json(Envelope::ok(
            "The movie was found",
            MovieRecord::from(&movie),
        )),
        Ok(None) => Json(Envelope::failure(
            404,
            format!("No active movie with id {}", req.id),
        )),
        Err(e) => Json(Envelope::from_error(&e, 400)),
    }
}
