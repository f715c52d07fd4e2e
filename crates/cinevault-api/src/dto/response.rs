//! Response wire records and their marshaling from entities.

use serde::{Deserialize, Serialize};

use cinevault_core::types::dates::{format_birthdate, format_timestamp};
use cinevault_entity::actor::Actor;
use cinevault_entity::director::Director;
use cinevault_entity::genre::Genre;
use cinevault_entity::movie::MovieWithRelations;

/// Actor as it travels on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorRecord {
    /// Actor id.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// Birthdate as `YYYY-MM-DD`.
    pub birthdate: String,
    /// Hosted avatar URL, when present.
    pub avatar: Option<String>,
    /// Active-state flag.
    pub state: bool,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
    /// Last-update timestamp (RFC 3339).
    pub updated_at: String,
}

impl From<&Actor> for ActorRecord {
    fn from(actor: &Actor) -> Self {
        Self {
            id: actor.id,
            name: actor.name.clone(),
            birthdate: format_birthdate(actor.birthdate),
            avatar: actor.avatar.clone(),
            state: actor.state,
            created_at: format_timestamp(actor.created_at),
            updated_at: format_timestamp(actor.updated_at),
        }
    }
}

/// Director as it travels on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectorRecord {
    /// Director id.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// Birthdate as `YYYY-MM-DD`.
    pub birthdate: String,
    /// Hosted avatar URL, when present.
    pub avatar: Option<String>,
    /// Active-state flag.
    pub state: bool,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
    /// Last-update timestamp (RFC 3339).
    pub updated_at: String,
}

impl From<&Director> for DirectorRecord {
    fn from(director: &Director) -> Self {
        Self {
            id: director.id,
            name: director.name.clone(),
            birthdate: format_birthdate(director.birthdate),
            avatar: director.avatar.clone(),
            state: director.state,
            created_at: format_timestamp(director.created_at),
            updated_at: format_timestamp(director.updated_at),
        }
    }
}

/// Genre as it travels on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreRecord {
    /// Genre id.
    pub id: i64,
    /// Genre name.
    pub name: String,
    /// Active-state flag.
    pub state: bool,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
    /// Last-update timestamp (RFC 3339).
    pub updated_at: String,
}

impl From<&Genre> for GenreRecord {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id,
            name: genre.name.clone(),
            state: genre.state,
            created_at: format_timestamp(genre.created_at),
            updated_at: format_timestamp(genre.updated_at),
        }
    }
}

/// Movie with its hydrated relations as it travels on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Movie id.
    pub id: i64,
    /// Movie title.
    pub title: String,
    /// Plot synopsis.
    pub synopsis: String,
    /// Release year.
    pub year: i32,
    /// Rating, narrowed from the stored double precision to the wire's
    /// single precision. The precision loss is part of the contract.
    pub rating: f32,
    /// Running time in minutes.
    pub duration: i32,
    /// The directing director's id.
    pub director_id: i64,
    /// Hosted poster URL, when present.
    pub poster: Option<String>,
    /// Active-state flag.
    pub state: bool,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
    /// Last-update timestamp (RFC 3339).
    pub updated_at: String,
    /// The active director, absent when soft-deleted.
    pub director: Option<DirectorRecord>,
    /// Active linked actors.
    pub actors: Vec<ActorRecord>,
    /// Active linked genres.
    pub genres: Vec<GenreRecord>,
}

impl From<&MovieWithRelations> for MovieRecord {
    fn from(hydrated: &MovieWithRelations) -> Self {
        let movie = &hydrated.movie;
        Self {
            id: movie.id,
            title: movie.title.clone(),
            synopsis: movie.synopsis.clone(),
            year: movie.year,
            rating: movie.rating as f32,
            duration: movie.duration,
            director_id: movie.director_id,
            poster: movie.poster.clone(),
            state: movie.state,
            created_at: format_timestamp(movie.created_at),
            updated_at: format_timestamp(movie.updated_at),
            director: hydrated.director.as_ref().map(DirectorRecord::from),
            actors: hydrated.actors.iter().map(ActorRecord::from).collect(),
            genres: hydrated.genres.iter().map(GenreRecord::from).collect(),
        }
    }
}

/// Health probe payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthRecord {
    /// Overall status.
    pub status: String,
    /// Database reachability.
    pub database: String,
    /// Crate version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use cinevault_entity::movie::Movie;

    fn sample_movie() -> Movie {
        Movie {
            id: 1,
            title: "Alien".to_string(),
            synopsis: "In space no one can hear you scream.".to_string(),
            year: 1979,
            rating: 8.5,
            duration: 117,
            director_id: 4,
            poster: None,
            state: true,
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        }
    }

    #[test]
    fn test_movie_marshaling_narrows_rating() {
        let mut movie = sample_movie();
        movie.rating = 8.123456789;

        let record = MovieRecord::from(&MovieWithRelations {
            movie,
            director: None,
            actors: Vec::new(),
            genres: Vec::new(),
        });

        assert!((record.rating - 8.123_457_f32).abs() < 1e-5);
        assert_eq!(record.created_at, "2024-01-02T03:04:05Z");
    }

    #[test]
    fn test_inactive_director_is_absent() {
        let record = MovieRecord::from(&MovieWithRelations {
            movie: sample_movie(),
            director: None,
            actors: Vec::new(),
            genres: Vec::new(),
        });

        assert!(record.director.is_none());
        assert!(record.actors.is_empty());
        assert!(record.genres.is_empty());
    }

    #[test]
    fn test_actor_birthdate_wire_format() {
        let actor = Actor {
            id: 9,
            name: "Sigourney Weaver".to_string(),
            birthdate: NaiveDate::from_ymd_opt(1949, 10, 8).unwrap(),
            avatar: Some("https://media.example.com/actor/sw.png".to_string()),
            state: true,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };

        let record = ActorRecord::from(&actor);
        assert_eq!(record.birthdate, "1949-10-08");
        assert!(record.state);
    }
}
