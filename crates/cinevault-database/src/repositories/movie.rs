//! Movie repository implementation: the listing/retrieval core.
//!
//! The listing path composes its predicates dynamically (title substring,
//! genre-name substring) on top of the base active-state filter, then
//! hydrates the page with each movie's active director, actors, and
//! genres in one batch query per relation.

use std::collections::HashMap;

use sqlx::postgres::Postgres;
use sqlx::{FromRow, PgPool, QueryBuilder};

use cinevault_core::error::{AppError, ErrorKind};
use cinevault_core::result::AppResult;
use cinevault_core::types::pagination::PageRequest;
use cinevault_entity::actor::Actor;
use cinevault_entity::director::Director;
use cinevault_entity::genre::Genre;
use cinevault_entity::movie::{CreateMovie, Movie, MovieFilter, MovieWithRelations, UpdateMovie};

/// Repository for movie CRUD and the filtered listing path.
#[derive(Debug, Clone)]
pub struct MovieRepository {
    pool: PgPool,
}

/// An actor row joined with the movie it is linked to.
#[derive(Debug, FromRow)]
struct ActorLink {
    movie_id: i64,
    #[sqlx(flatten)]
    actor: Actor,
}

/// A genre row joined with the movie it is linked to.
#[derive(Debug, FromRow)]
struct GenreLink {
    movie_id: i64,
    #[sqlx(flatten)]
    genre: Genre,
}

impl MovieRepository {
    /// Create a new movie repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an active movie by exact title.
    pub async fn find_active_by_title(&self, title: &str) -> AppResult<Option<Movie>> {
        sqlx::query_as::<_, Movie>("SELECT * FROM movies WHERE title = $1 AND state = TRUE")
            .bind(title)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find movie by title", e)
            })
    }

    /// Insert a new active movie with its actor/genre links.
    ///
    /// Rejects the insert when an active movie with the same title already
    /// exists; the title lookup is a separate statement from the insert.
    /// The movie row and its junction rows commit in one transaction.
    pub async fn insert(&self, data: &CreateMovie) -> AppResult<MovieWithRelations> {
        if self.find_active_by_title(&data.title).await?.is_some() {
            return Err(AppError::conflict(format!(
                "An active movie titled '{}' already exists",
                data.title
            )));
        }

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to open transaction", e)
        })?;

        let movie = sqlx::query_as::<_, Movie>(
            "INSERT INTO movies (title, synopsis, year, rating, duration, director_id, poster, state) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.synopsis)
        .bind(data.year)
        .bind(data.rating)
        .bind(data.duration)
        .bind(data.director_id)
        .bind(&data.poster)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create movie", e))?;

        for actor_id in &data.actor_ids {
            sqlx::query("INSERT INTO movie_actors (movie_id, actor_id) VALUES ($1, $2)")
                .bind(movie.id)
                .bind(actor_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to link actor", e)
                })?;
        }

        for genre_id in &data.genre_ids {
            sqlx::query("INSERT INTO movie_genres (movie_id, genre_id) VALUES ($1, $2)")
                .bind(movie.id)
                .bind(genre_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to link genre", e)
                })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit movie insert", e)
        })?;

        let mut hydrated = self.hydrate(vec![movie]).await?;
        hydrated
            .pop()
            .ok_or_else(|| AppError::internal("Hydration dropped the inserted movie"))
    }

    /// Update a movie's scalar fields by id; `poster: None` keeps the
    /// stored value.
    pub async fn update(&self, data: &UpdateMovie) -> AppResult<()> {
        sqlx::query(
            "UPDATE movies SET title = $2, \
                               synopsis = $3, \
                               year = $4, \
                               rating = $5, \
                               duration = $6, \
                               director_id = $7, \
                               poster = COALESCE($8, poster), \
                               updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(data.id)
        .bind(&data.title)
        .bind(&data.synopsis)
        .bind(data.year)
        .bind(data.rating)
        .bind(data.duration)
        .bind(data.director_id)
        .bind(&data.poster)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update movie", e))?;

        Ok(())
    }

    /// List one page of active movies matching the filter, hydrated with
    /// their active relations.
    ///
    /// A store failure on the base query aborts the whole operation;
    /// partial pages are never returned.
    pub async fn list(
        &self,
        filter: &MovieFilter,
        page: &PageRequest,
    ) -> AppResult<Vec<MovieWithRelations>> {
        let mut query = build_listing_query(filter, page);

        let movies = query
            .build_query_as::<Movie>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list movies", e))?;

        self.hydrate(movies).await
    }

    /// Fetch one active movie by id, hydrated with its active relations.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<MovieWithRelations>> {
        let movie = sqlx::query_as::<_, Movie>("SELECT * FROM movies WHERE id = $1 AND state = TRUE")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find movie by id", e)
            })?;

        match movie {
            Some(movie) => Ok(self.hydrate(vec![movie]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Soft-delete a movie by id.
    ///
    /// Succeeds as long as the statement runs; an unknown or already
    /// inactive id is not distinguished from a real deletion.
    pub async fn soft_delete(&self, id: i64) -> AppResult<()> {
        sqlx::query("UPDATE movies SET state = FALSE, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete movie", e))?;

        Ok(())
    }

    /// Attach the active director, actors, and genres to a page of movies.
    ///
    /// One query per relation for the whole page. Movies whose relations
    /// are empty (or whose director was soft-deleted) hydrate to empty
    /// collections / `None` rather than failing the page.
    async fn hydrate(&self, movies: Vec<Movie>) -> AppResult<Vec<MovieWithRelations>> {
        if movies.is_empty() {
            return Ok(Vec::new());
        }

        let movie_ids: Vec<i64> = movies.iter().map(|m| m.id).collect();
        let director_ids: Vec<i64> = movies.iter().map(|m| m.director_id).collect();

        let directors = sqlx::query_as::<_, Director>(
            "SELECT * FROM directors WHERE id = ANY($1) AND state = TRUE",
        )
        .bind(&director_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load directors", e))?;

        let actor_links = sqlx::query_as::<_, ActorLink>(
            "SELECT ma.movie_id, a.* FROM actors a \
             JOIN movie_actors ma ON ma.actor_id = a.id \
             WHERE ma.movie_id = ANY($1) AND a.state = TRUE \
             ORDER BY a.id",
        )
        .bind(&movie_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load actors", e))?;

        let genre_links = sqlx::query_as::<_, GenreLink>(
            "SELECT mg.movie_id, g.* FROM genres g \
             JOIN movie_genres mg ON mg.genre_id = g.id \
             WHERE mg.movie_id = ANY($1) AND g.state = TRUE \
             ORDER BY g.id",
        )
        .bind(&movie_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load genres", e))?;

        let directors_by_id: HashMap<i64, Director> =
            directors.into_iter().map(|d| (d.id, d)).collect();

        let mut actors_by_movie: HashMap<i64, Vec<Actor>> = HashMap::new();
        for link in actor_links {
            actors_by_movie.entry(link.movie_id).or_default().push(link.actor);
        }

        let mut genres_by_movie: HashMap<i64, Vec<Genre>> = HashMap::new();
        for link in genre_links {
            genres_by_movie.entry(link.movie_id).or_default().push(link.genre);
        }

        Ok(movies
            .into_iter()
            .map(|movie| MovieWithRelations {
                director: directors_by_id.get(&movie.director_id).cloned(),
                actors: actors_by_movie.remove(&movie.id).unwrap_or_default(),
                genres: genres_by_movie.remove(&movie.id).unwrap_or_default(),
                movie,
            })
            .collect())
    }
}

/// Compose the movie listing query.
///
/// The base predicate is the active-state filter; the title and genre
/// criteria are appended with bound parameters only when present, so an
/// absent filter is a true no-op. The genre criterion is an `EXISTS`
/// semi-join against active genres: one row per movie no matter how many
/// of its genres match.
fn build_listing_query(filter: &MovieFilter, page: &PageRequest) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new("SELECT * FROM movies WHERE state = TRUE");

    if filter.has_title() {
        let title = filter.movie_title.as_deref().unwrap_or_default();
        query.push(" AND LOWER(title) LIKE ");
        query.push_bind(format!("%{}%", title.to_lowercase()));
    }

    if filter.has_genre() {
        let genre = filter.genre_name.as_deref().unwrap_or_default();
        query.push(
            " AND EXISTS (SELECT 1 FROM movie_genres mg \
             JOIN genres g ON g.id = mg.genre_id \
             WHERE mg.movie_id = movies.id AND g.state = TRUE AND LOWER(g.name) LIKE ",
        );
        query.push_bind(format!("%{}%", genre.to_lowercase()));
        query.push(")");
    }

    query.push(" ORDER BY id LIMIT ");
    query.push_bind(page.limit() as i64);
    query.push(" OFFSET ");
    query.push_bind(page.offset() as i64);

    query
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(title: Option<&str>, genre: Option<&str>) -> MovieFilter {
        MovieFilter {
            movie_title: title.map(str::to_string),
            genre_name: genre.map(str::to_string),
        }
    }

    #[test]
    fn test_no_filter_is_base_query() {
        let query = build_listing_query(&MovieFilter::default(), &PageRequest::new(0, 10));
        let sql = query.sql();
        assert!(sql.starts_with("SELECT * FROM movies WHERE state = TRUE"));
        assert!(!sql.contains("LIKE"));
        assert!(!sql.contains("EXISTS"));
        assert!(sql.contains("ORDER BY id LIMIT $1 OFFSET $2"));
    }

    #[test]
    fn test_empty_strings_are_no_ops() {
        let query = build_listing_query(&filter(Some(""), Some("")), &PageRequest::new(0, 10));
        assert!(!query.sql().contains("LIKE"));
    }

    #[test]
    fn test_title_filter_is_parameterized() {
        let query = build_listing_query(&filter(Some("Alien"), None), &PageRequest::new(0, 10));
        let sql = query.sql();
        assert!(sql.contains("LOWER(title) LIKE $1"));
        // The pattern travels as a bound argument, never inline.
        assert!(!sql.contains("Alien"));
        assert!(!sql.contains("alien"));
    }

    #[test]
    fn test_genre_filter_is_a_semi_join() {
        let query = build_listing_query(&filter(None, Some("drama")), &PageRequest::new(0, 10));
        let sql = query.sql();
        assert!(sql.contains("EXISTS (SELECT 1 FROM movie_genres mg"));
        assert!(sql.contains("g.state = TRUE"));
        assert!(sql.contains("LOWER(g.name) LIKE $1"));
        assert!(!sql.contains("drama"));
    }

    #[test]
    fn test_filters_are_additive() {
        let query = build_listing_query(
            &filter(Some("alien"), Some("horror")),
            &PageRequest::new(2, 25),
        );
        let sql = query.sql();
        assert!(sql.contains("LOWER(title) LIKE $1"));
        assert!(sql.contains("LOWER(g.name) LIKE $2"));
        assert!(sql.contains("LIMIT $3 OFFSET $4"));
    }
}
