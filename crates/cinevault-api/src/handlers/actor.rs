//! Actor service handlers.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use cinevault_core::types::dates::parse_birthdate;
use cinevault_core::types::envelope::Envelope;
use cinevault_core::types::pagination::PageRequest;
use cinevault_entity::actor::{CreateActor, UpdateActor};
use cinevault_media::UploadPreset;

use crate::dto::request::{ActorInput, IdRequest};
use crate::dto::response::ActorRecord;
use crate::handlers::resolve_image;
use crate::state::AppState;

/// POST /api/actors/insert
pub async fn insert(
    State(state): State<AppState>,
    Json(req): Json<ActorInput>,
) -> Json<Envelope<ActorRecord>> {
    if let Err(e) = req.validate() {
        return Json(Envelope::failure(400, format!("Invalid actor payload: {e}")));
    }

    let birthdate = match parse_birthdate(&req.birthdate) {
        Ok(date) => date,
        Err(e) => return Json(Envelope::from_error(&e, 400)),
    };

    let avatar = match resolve_image(&state.media, req.avatar.as_deref(), &UploadPreset::ACTOR, true)
        .await
    {
        Ok(url) => url,
        Err(e) => return Json(Envelope::from_error(&e, 400)),
    };

    let data = CreateActor {
        name: req.name,
        birthdate,
        avatar,
    };

    match state.actor_repo.insert(&data).await {
        Ok(actor) => Json(Envelope::created(
            "The actor has been created",
            ActorRecord::from(&actor),
        )),
        Err(e) => Json(Envelope::from_error(&e, 400)),
    }
}

/// POST /api/actors/update
pub async fn update(
    State(state): State<AppState>,
    Json(req): Json<ActorInput>,
) -> Json<Envelope<ActorRecord>> {
    if let Err(e) = req.validate() {
        return Json(Envelope::failure(400, format!("Invalid actor payload: {e}")));
    }

    let birthdate = match parse_birthdate(&req.birthdate) {
        Ok(date) => date,
        Err(e) => return Json(Envelope::from_error(&e, 400)),
    };

    // An already-hosted URL resolves to None here, leaving the stored
    // avatar untouched; only fresh inline data replaces it.
    let avatar =
        match resolve_image(&state.media, req.avatar.as_deref(), &UploadPreset::ACTOR, false).await
        {
            Ok(url) => url,
            Err(e) => return Json(Envelope::from_error(&e, 400)),
        };

    let data = UpdateActor {
        id: req.id,
        name: req.name,
        birthdate,
        avatar,
    };

    match state.actor_repo.update(&data).await {
        Ok(()) => Json(Envelope::ok_empty("Record updated")),
        Err(e) => Json(Envelope::from_error(&e, 400)),
    }
}

/// POST /api/actors/list
pub async fn list(
    State(state): State<AppState>,
    Json(page): Json<PageRequest>,
) -> Json<Envelope<Vec<ActorRecord>>> {
    match state.actor_repo.list(&page).await {
        Ok((actors, total)) => {
            let records: Vec<ActorRecord> = actors.iter().map(ActorRecord::from).collect();
            let pages = total.map(|t| page.total_pages(t));
            Json(Envelope::ok_listing("Actor listing", records, pages))
        }
        Err(e) => {
            tracing::error!(error = %e, "Actor listing failed");
            let mut envelope = Envelope::from_error(&e, 500);
            envelope.value = Some(Vec::new());
            Json(envelope)
        }
    }
}

/// POST /api/actors/delete
pub async fn delete(
    State(state): State<AppState>,
    Json(req): Json<IdRequest>,
) -> Json<Envelope<ActorRecord>> {
    match state.actor_repo.soft_delete(req.id).await {
        Ok(()) => Json(Envelope::ok_empty("The record was deleted")),
        Err(e) => Json(Envelope::from_error(&e, 400)),
    }
}
