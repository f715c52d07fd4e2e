//! Genre entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A movie genre, referenced through the `movie_genres` junction.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Genre {
    /// Unique genre identifier.
    pub id: i64,
    /// Genre name.
    pub name: String,
    /// Soft-delete flag; `false` means the row is deleted.
    pub state: bool,
    /// When the genre was created.
    pub created_at: DateTime<Utc>,
    /// When the genre was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new genre.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGenre {
    /// Genre name.
    pub name: String,
}

/// Data for updating an existing genre.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGenre {
    /// The genre to update.
    pub id: i64,
    /// New name.
    pub name: String,
}
