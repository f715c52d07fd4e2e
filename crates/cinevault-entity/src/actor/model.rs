//! Actor entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A performer referenced by movies through the `movie_actors` junction.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Actor {
    /// Unique actor identifier.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// Date of birth.
    pub birthdate: NaiveDate,
    /// Avatar URL on the media host, if one was uploaded.
    pub avatar: Option<String>,
    /// Soft-delete flag; `false` means the row is deleted.
    pub state: bool,
    /// When the actor was created.
    pub created_at: DateTime<Utc>,
    /// When the actor was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateActor {
    /// Full name.
    pub name: String,
    /// Date of birth.
    pub birthdate: NaiveDate,
    /// Avatar URL obtained from the media host (optional).
    pub avatar: Option<String>,
}

/// Data for updating an existing actor.
///
/// `avatar: None` leaves the stored avatar untouched; `Some` replaces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateActor {
    /// The actor to update.
    pub id: i64,
    /// New name.
    pub name: String,
    /// New birthdate.
    pub birthdate: NaiveDate,
    /// New avatar URL, when a fresh image was uploaded.
    pub avatar: Option<String>,
}
