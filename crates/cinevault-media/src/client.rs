//! HTTP client for the image host upload API.

use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use tracing::debug;

use cinevault_core::config::MediaConfig;
use cinevault_core::error::{AppError, ErrorKind};
use cinevault_core::result::AppResult;

/// Named upload parameters for one kind of image.
#[derive(Debug, Clone, Copy)]
pub struct UploadPreset {
    /// Preset name registered with the media host.
    pub preset: &'static str,
    /// Target folder on the host.
    pub folder: &'static str,
    /// Stored image format.
    pub format: &'static str,
}

impl UploadPreset {
    /// Actor avatar images.
    pub const ACTOR: Self = Self {
        preset: "preset-actor",
        folder: "actor",
        format: "png",
    };

    /// Director avatar images.
    pub const DIRECTOR: Self = Self {
        preset: "preset-director",
        folder: "director",
        format: "png",
    };

    /// Movie poster images.
    pub const MOVIE: Self = Self {
        preset: "preset-movie",
        folder: "movie",
        format: "png",
    };
}

/// Client for the third-party image host.
///
/// Constructed once at startup and shared read-only from the request
/// path; the underlying `reqwest::Client` pools connections internally.
#[derive(Debug, Clone)]
pub struct MediaClient {
    http: reqwest::Client,
    upload_url: String,
}

#[derive(Debug, Serialize)]
struct UploadRequest<'a> {
    file: String,
    upload_preset: &'a str,
    folder: &'a str,
    format: &'a str,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

impl MediaClient {
    /// Build a media client from configuration.
    pub fn new(config: &MediaConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upload_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    "Failed to build media HTTP client",
                    e,
                )
            })?;

        Ok(Self {
            http,
            upload_url: config.upload_url.trim_end_matches('/').to_string(),
        })
    }

    /// Upload a base64 PNG payload, returning the hosted secure URL.
    pub async fn upload(&self, image_base64: &str, preset: &UploadPreset) -> AppResult<String> {
        ensure_base64(image_base64)?;

        let body = UploadRequest {
            file: data_uri(image_base64),
            upload_preset: preset.preset,
            folder: preset.folder,
            format: preset.format,
        };

        let response = self
            .http
            .post(format!("{}/image/upload", self.upload_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Media upload request failed", e)
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                "Failed to read media host response",
                e,
            )
        })?;

        if !status.is_success() {
            return Err(AppError::external_service(format!(
                "Media host answered {status}: {text}"
            )));
        }

        let parsed: UploadResponse = serde_json::from_str(&text).map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                "Media host answered with an unexpected body",
                e,
            )
        })?;

        debug!(folder = preset.folder, url = %parsed.secure_url, "Image uploaded");
        Ok(parsed.secure_url)
    }
}

/// Wrap a base64 payload in the data URI the host expects.
fn data_uri(image_base64: &str) -> String {
    format!("data:image/png;base64,{image_base64}")
}

/// Reject payloads that are not decodable base64 before hitting the host.
fn ensure_base64(payload: &str) -> AppResult<()> {
    if payload.is_empty() {
        return Err(AppError::validation("Image payload is empty"));
    }
    BASE64
        .decode(payload)
        .map(|_| ())
        .map_err(|_| AppError::validation("Image payload is not valid base64"))
}
