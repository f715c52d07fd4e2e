//! The uniform operation-outcome envelope.
//!
//! Every RPC operation answers with an [`Envelope`]: the transport call
//! always completes, and success or failure is signalled exclusively
//! through `is_ok` and `status`. Callers must inspect the envelope rather
//! than the transport status.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorKind};

/// Title used for successful outcomes.
pub const SUCCESS_TITLE: &str = "Operation successful";
/// Title used for failed outcomes.
pub const FAILURE_TITLE: &str = "Operation failed";

/// Uniform result wrapper returned by every operation.
///
/// The payload is a typed generic rather than a dynamically-typed value,
/// so no runtime downcasts are needed anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Short outcome headline.
    pub title: String,
    /// Whether the operation succeeded.
    pub is_ok: bool,
    /// Human-readable outcome message.
    pub message: String,
    /// HTTP-style status code describing the outcome.
    pub status: u16,
    /// Operation payload, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<T>,
    /// Total page count for list operations, when computed in time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

impl<T> Envelope<T> {
    /// A successful outcome with payload (status 200).
    pub fn ok(message: impl Into<String>, value: T) -> Self {
        Self::success(200, message, Some(value))
    }

    /// A successful creation with payload (status 201).
    pub fn created(message: impl Into<String>, value: T) -> Self {
        Self::success(201, message, Some(value))
    }

    /// A successful outcome without payload (status 200).
    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self::success(200, message, None)
    }

    /// A successful list outcome with an optional total page count.
    pub fn ok_listing(message: impl Into<String>, value: T, count: Option<u64>) -> Self {
        Self {
            count,
            ..Self::success(200, message, Some(value))
        }
    }

    /// A failed outcome with an explicit status.
    pub fn failure(status: u16, message: impl Into<String>) -> Self {
        Self {
            title: FAILURE_TITLE.to_string(),
            is_ok: false,
            message: message.into(),
            status,
            value: None,
            count: None,
        }
    }

    /// Map an [`AppError`] to a failed envelope.
    ///
    /// Validation and conflict errors always answer 400 and not-found
    /// answers 404; any other kind takes `fallback_status`, which lets
    /// mutations report 400 while list-path store failures report 500.
    pub fn from_error(err: &AppError, fallback_status: u16) -> Self {
        let status = match err.kind {
            ErrorKind::Validation | ErrorKind::Conflict => 400,
            ErrorKind::NotFound => 404,
            _ => fallback_status,
        };
        Self::failure(status, err.message.clone())
    }

    fn success(status: u16, message: impl Into<String>, value: Option<T>) -> Self {
        Self {
            title: SUCCESS_TITLE.to_string(),
            is_ok: true,
            message: message.into(),
            status,
            value,
            count: None,
        }
    }
}
