//! Director service handlers.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use cinevault_core::types::dates::parse_birthdate;
use cinevault_core::types::envelope::Envelope;
use cinevault_core::types::pagination::PageRequest;
use cinevault_entity::director::{CreateDirector, UpdateDirector};
use cinevault_media::UploadPreset;

use crate::dto::request::{DirectorInput, IdRequest};
use crate::dto::response::DirectorRecord;
use crate::handlers::resolve_image;
use crate::state::AppState;

/// POST /api/directors/insert
pub async fn insert(
    State(state): State<AppState>,
    Json(req): Json<DirectorInput>,
) -> Json<Envelope<DirectorRecord>> {
    if let Err(e) = req.validate() {
        return Json(Envelope::failure(
            400,
            format!("Invalid director payload: {e}"),
        ));
    }

    let birthdate = match parse_birthdate(&req.birthdate) {
        Ok(date) => date,
        Err(e) => return Json(Envelope::from_error(&e, 400)),
    };

    let avatar = match resolve_image(
        &state.media,
        req.avatar.as_deref(),
        &UploadPreset::DIRECTOR,
        true,
    )
    .await
    {
        Ok(url) => url,
        Err(e) => return Json(Envelope::from_error(&e, 400)),
    };

    let data = CreateDirector {
        name: req.name,
        birthdate,
        avatar,
    };

    match state.director_repo.insert(&data).await {
        Ok(director) => Json(Envelope::created(
            "The director has been created",
            DirectorRecord::from(&director),
        )),
        Err(e) => Json(Envelope::from_error(&e, 400)),
    }
}

/// POST /api/directors/update
pub async fn update(
    State(state): State<AppState>,
    Json(req): Json<DirectorInput>,
) -> Json<Envelope<DirectorRecord>> {
    if let Err(e) = req.validate() {
        return Json(Envelope::failure(
            400,
            format!("Invalid director payload: {e}"),
        ));
    }

    let birthdate = match parse_birthdate(&req.birthdate) {
        Ok(date) => date,
        Err(e) => return Json(Envelope::from_error(&e, 400)),
    };

    let avatar = match resolve_image(
        &state.media,
        req.avatar.as_deref(),
        &UploadPreset::DIRECTOR,
        false,
    )
    .await
    {
        Ok(url) => url,
        Err(e) => return Json(Envelope::from_error(&e, 400)),
    };

    let data = UpdateDirector {
        id: req.id,
        name: req.name,
        birthdate,
        avatar,
    };

    match state.director_repo.update(&data).await {
        Ok(()) => Json(Envelope::ok_empty("Record updated")),
        Err(e) => Json(Envelope::from_error(&e, 400)),
    }
}

/// POST /api/directors/list
pub async fn list(
    State(state): State<AppState>,
    Json(page): Json<PageRequest>,
) -> Json<Envelope<Vec<DirectorRecord>>> {
    match state.director_repo.list(&page).await {
        Ok((directors, total)) => {
            let records: Vec<DirectorRecord> = directors.iter().map(DirectorRecord::from).collect();
            let pages = total.map(|t| page.total_pages(t));
            Json(Envelope::ok_listing("Director listing", records, pages))
        }
        Err(e) => {
            tracing::error!(error = %e, "Director listing failed");
            let mut envelope = Envelope::from_error(&e, 500);
            envelope.value = Some(Vec::new());
            Json(envelope)
        }
    }
}

/// POST /api/directors/delete
pub async fn delete(
    State(state): State<AppState>,
    Json(req): Json<IdRequest>,
) -> Json<Envelope<DirectorRecord>> {
    match state.director_repo.soft_delete(req.id).await {
        Ok(()) => Json(Envelope::ok_empty("The record was deleted")),
        Err(e) => Json(Envelope::from_error(&e, 400)),
    }
}
