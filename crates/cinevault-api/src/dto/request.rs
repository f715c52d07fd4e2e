//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use cinevault_core::types::pagination::PageRequest;
use cinevault_entity::movie::MovieFilter;

/// Actor insert/update payload.
///
/// `avatar` carries either inline base64 image data or an already-hosted
/// `https` URL; `birthdate` travels as a `YYYY-MM-DD` string.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ActorInput {
    /// Actor id; only meaningful for update.
    #[serde(default)]
    pub id: i64,
    /// Full name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Birthdate as `YYYY-MM-DD`.
    pub birthdate: String,
    /// Inline base64 image data or a hosted URL.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Director insert/update payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DirectorInput {
    /// Director id; only meaningful for update.
    #[serde(default)]
    pub id: i64,
    /// Full name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Birthdate as `YYYY-MM-DD`.
    pub birthdate: String,
    /// Inline base64 image data or a hosted URL.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Genre insert/update payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenreInput {
    /// Genre id; only meaningful for update.
    #[serde(default)]
    pub id: i64,
    /// Genre name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
}

/// Movie insert/update payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MovieInput {
    /// Movie id; only meaningful for update.
    #[serde(default)]
    pub id: i64,
    /// Movie title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Plot synopsis.
    #[validate(length(max = 1000, message = "Synopsis is limited to 1000 characters"))]
    #[serde(default)]
    pub synopsis: String,
    /// Release year.
    pub year: i32,
    /// Rating in the wire's single-precision form.
    pub rating: f32,
    /// Running time in minutes.
    pub duration: i32,
    /// The directing director's id.
    pub director_id: i64,
    /// Inline base64 image data or a hosted URL.
    #[serde(default)]
    pub poster: Option<String>,
    /// Ids of actors to link.
    #[serde(default)]
    pub actors: Vec<i64>,
    /// Ids of genres to link.
    #[serde(default)]
    pub genres: Vec<i64>,
}

/// Paginated movie listing request with optional filter criteria.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieListRequest {
    /// Page coordinates (zero-based).
    #[serde(flatten)]
    pub page: PageRequest,
    /// Optional free-text filters.
    #[serde(default)]
    pub filter_criteria: Option<MovieFilter>,
}

/// Request addressing a single record by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdRequest {
    /// The record id.
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_list_request_defaults() {
        let req: MovieListRequest = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(req.page.page, 0);
        assert!(req.filter_criteria.is_none());
    }

    #[test]
    fn test_movie_list_request_with_criteria() {
        let req: MovieListRequest = serde_json::from_str(
            r#"{"page": 2, "page_size": 10, "filter_criteria": {"genre_name": "drama"}}"#,
        )
        .expect("deserialize");
        assert_eq!(req.page.offset(), 20);
        let criteria = req.filter_criteria.expect("criteria");
        assert!(criteria.has_genre());
        assert!(!criteria.has_title());
    }

    #[test]
    fn test_empty_name_fails_validation() {
        let input = GenreInput {
            id: 0,
            name: String::new(),
        };
        assert!(input.validate().is_err());
    }
}
