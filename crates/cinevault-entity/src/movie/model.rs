//! Movie entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::actor::Actor;
use crate::director::Director;
use crate::genre::Genre;

/// A catalog movie row.
///
/// The director is a required reference; actors and genres are optional
/// many-to-many associations backed by junction tables.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Movie {
    /// Unique movie identifier.
    pub id: i64,
    /// Movie title.
    pub title: String,
    /// Plot synopsis.
    pub synopsis: String,
    /// Release year.
    pub year: i32,
    /// Average rating. Stored double-precision; the wire form narrows to
    /// single-precision, a known lossy conversion.
    pub rating: f64,
    /// Running time in minutes.
    pub duration: i32,
    /// The directing [`Director`]'s id.
    pub director_id: i64,
    /// Poster URL on the media host, if one was uploaded.
    pub poster: Option<String>,
    /// Soft-delete flag; `false` means the row is deleted.
    pub state: bool,
    /// When the movie was created.
    pub created_at: DateTime<Utc>,
    /// When the movie was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A movie together with its eagerly-loaded active relations.
///
/// Only active relations are hydrated: a soft-deleted director surfaces as
/// `None`, and soft-deleted actors/genres are absent from the collections
/// even while the junction rows still reference them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieWithRelations {
    /// The movie row itself.
    pub movie: Movie,
    /// The active director, when still active.
    pub director: Option<Director>,
    /// Active linked actors.
    pub actors: Vec<Actor>,
    /// Active linked genres.
    pub genres: Vec<Genre>,
}

/// Data required to create a new movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMovie {
    /// Movie title.
    pub title: String,
    /// Plot synopsis.
    pub synopsis: String,
    /// Release year.
    pub year: i32,
    /// Average rating.
    pub rating: f64,
    /// Running time in minutes.
    pub duration: i32,
    /// The directing director's id.
    pub director_id: i64,
    /// Poster URL obtained from the media host (optional).
    pub poster: Option<String>,
    /// Actors to link through `movie_actors`.
    pub actor_ids: Vec<i64>,
    /// Genres to link through `movie_genres`.
    pub genre_ids: Vec<i64>,
}

/// Data for updating an existing movie's scalar fields.
///
/// `poster: None` leaves the stored poster untouched; `Some` replaces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMovie {
    /// The movie to update.
    pub id: i64,
    /// New title.
    pub title: String,
    /// New synopsis.
    pub synopsis: String,
    /// New release year.
    pub year: i32,
    /// New rating.
    pub rating: f64,
    /// New duration in minutes.
    pub duration: i32,
    /// New director reference.
    pub director_id: i64,
    /// New poster URL, when a fresh image was uploaded.
    pub poster: Option<String>,
}

/// Optional free-text criteria for the movie listing.
///
/// Both filters are additive; an absent or empty filter is a no-op.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieFilter {
    /// Case-insensitive title substring.
    pub movie_title: Option<String>,
    /// Case-insensitive genre-name substring; matches movies having at
    /// least one active genre whose name contains it.
    pub genre_name: Option<String>,
}

impl MovieFilter {
    /// True when no criterion narrows the listing.
    pub fn is_empty(&self) -> bool {
        !self.has_title() && !self.has_genre()
    }

    /// True when a non-empty title criterion is present.
    pub fn has_title(&self) -> bool {
        self.movie_title.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// True when a non-empty genre criterion is present.
    pub fn has_genre(&self) -> bool {
        self.genre_name.as_deref().is_some_and(|g| !g.is_empty())
    }
}
