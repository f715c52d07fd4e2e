//! Genre service handlers.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use cinevault_core::types::envelope::Envelope;
use cinevault_core::types::pagination::PageRequest;
use cinevault_entity::genre::{CreateGenre, UpdateGenre};

use crate::dto::request::{GenreInput, IdRequest};
use crate::dto::response::GenreRecord;
use crate::state::AppState;

/// POST /api/genres/insert
pub async fn insert(
    State(state): State<AppState>,
    Json(req): Json<GenreInput>,
) -> Json<Envelope<GenreRecord>> {
    if let Err(e) = req.validate() {
        return Json(Envelope::failure(400, format!("Invalid genre payload: {e}")));
    }

    let data = CreateGenre { name: req.name };

    match state.genre_repo.insert(&data).await {
        Ok(genre) => Json(Envelope::created(
            "The genre has been created",
            GenreRecord::from(&genre),
        )),
        Err(e) => Json(Envelope::from_error(&e, 400)),
    }
}

/// POST /api/genres/update
pub async fn update(
    State(state): State<AppState>,
    Json(req): Json<GenreInput>,
) -> Json<Envelope<GenreRecord>> {
    if let Err(e) = req.validate() {
        return Json(Envelope::failure(400, format!("Invalid genre payload: {e}")));
    }

    let data = UpdateGenre {
        id: req.id,
        name: req.name,
    };

    match state.genre_repo.update(&data).await {
        Ok(()) => Json(Envelope::ok_empty("Record updated")),
        Err(e) => Json(Envelope::from_error(&e, 400)),
    }
}

/// POST /api/genres/list
pub async fn list(
    State(state): State<AppState>,
    Json(page): Json<PageRequest>,
) -> Json<Envelope<Vec<GenreRecord>>> {
    match state.genre_repo.list(&page).await {
        Ok((genres, total)) => {
            let records: Vec<GenreRecord> = genres.iter().map(GenreRecord::from).collect();
            let pages = total.map(|t| page.total_pages(t));
            Json(Envelope::ok_listing("Genre listing", records, pages))
        }
        Err(e) => {
            tracing::error!(error = %e, "Genre listing failed");
            let mut envelope = Envelope::from_error(&e, 500);
            envelope.value = Some(Vec::new());
            Json(envelope)
        }
    }
}

/// POST /api/genres/delete
pub async fn delete(
    State(state): State<AppState>,
    Json(req): Json<IdRequest>,
) -> Json<Envelope<GenreRecord>> {
    match state.genre_repo.soft_delete(req.id).await {
        Ok(()) => Json(Envelope::ok_empty("The record was deleted")),
        Err(e) => Json(Envelope::from_error(&e, 400)),
    }
}
