//! Request handlers for the RPC surface.
//!
//! Handlers are the validation/transform seam: they parse wire dates,
//! resolve inline images against the media host, delegate to the
//! repositories, and fold every outcome (success or failure) into the
//! response envelope. The transport status is always `200 OK`.

pub mod actor;
pub mod director;
pub mod genre;
pub mod health;
pub mod movie;

use cinevault_core::result::AppResult;
use cinevault_media::{MediaClient, UploadPreset, is_secure_url};

/// Resolve an avatar/poster field into the URL to store, uploading inline
/// image data to the media host when needed.
///
/// Content that is already a hosted `https` URL is never re-uploaded: on
/// insert (`keep_url = true`) it is stored as-is, on update
/// (`keep_url = false`) it resolves to `None` so the stored value stays
/// untouched. Empty or absent content resolves to `None` either way.
pub(crate) async fn resolve_image(
    media: &MediaClient,
    content: Option<&str>,
    preset: &UploadPreset,
    keep_url: bool,
) -> AppResult<Option<String>> {
    match content {
        None => Ok(None),
        Some("") => Ok(None),
        Some(url) if is_secure_url(url) => Ok(keep_url.then(|| url.to_string())),
        Some(inline) => media.upload(inline, preset).await.map(Some),
    }
}
