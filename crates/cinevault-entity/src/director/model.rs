//! Director entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A film director. Every movie references exactly one director.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Director {
    /// Unique director identifier.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// Date of birth.
    pub birthdate: NaiveDate,
    /// Avatar URL on the media host, if one was uploaded.
    pub avatar: Option<String>,
    /// Soft-delete flag; `false` means the row is deleted.
    pub state: bool,
    /// When the director was created.
    pub created_at: DateTime<Utc>,
    /// When the director was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new director.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDirector {
    /// Full name.
    pub name: String,
    /// Date of birth.
    pub birthdate: NaiveDate,
    /// Avatar URL obtained from the media host (optional).
    pub avatar: Option<String>,
}

/// Data for updating an existing director.
///
/// `avatar: None` leaves the stored avatar untouched; `Some` replaces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDirector {
    /// The director to update.
    pub id: i64,
    /// New name.
    pub name: String,
    /// New birthdate.
    pub birthdate: NaiveDate,
    /// New avatar URL, when a fresh image was uploaded.
    pub avatar: Option<String>,
}
