//! Genre repository implementation.

use std::time::Duration;

use sqlx::PgPool;
use tokio::time::timeout;
use tracing::warn;

use cinevault_core::error::{AppError, ErrorKind};
use cinevault_core::result::AppResult;
use cinevault_core::types::pagination::PageRequest;
use cinevault_entity::genre::{CreateGenre, Genre, UpdateGenre};

const COUNT_TIMEOUT: Duration = Duration::from_secs(5);

/// Repository for genre CRUD operations.
#[derive(Debug, Clone)]
pub struct GenreRepository {
    pool: PgPool,
}

impl GenreRepository {
    /// Create a new genre repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an active genre by exact name.
    pub async fn find_active_by_name(&self, name: &str) -> AppResult<Option<Genre>> {
        sqlx::query_as::<_, Genre>("SELECT * FROM genres WHERE name = $1 AND state = TRUE")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find genre by name", e)
            })
    }

    /// Insert a new active genre, rejecting duplicates among active rows.
    /// A name colliding only with soft-deleted rows is accepted and gets
    /// a fresh id. The lookup and the insert are two separate statements.
    pub async fn insert(&self, data: &CreateGenre) -> AppResult<Genre> {
        if self.find_active_by_name(&data.name).await?.is_some() {
            return Err(AppError::conflict(format!(
                "An active genre named '{}' already exists",
                data.name
            )));
        }

        sqlx::query_as::<_, Genre>(
            "INSERT INTO genres (name, state) VALUES ($1, TRUE) RETURNING *",
        )
        .bind(&data.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create genre", e))
    }

    /// Update a genre's name by id.
    pub async fn update(&self, data: &UpdateGenre) -> AppResult<()> {
        sqlx::query("UPDATE genres SET name = $2, updated_at = NOW() WHERE id = $1")
            .bind(data.id)
            .bind(&data.name)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update genre", e))?;

        Ok(())
    }

    /// List active genres for one page, with the total active count
    /// fetched concurrently and joined before the response is composed.
    pub async fn list(&self, page: &PageRequest) -> AppResult<(Vec<Genre>, Option<u64>)> {
        let page_fut = sqlx::query_as::<_, Genre>(
            "SELECT * FROM genres WHERE state = TRUE ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool);

        let count_fut =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM genres WHERE state = TRUE")
                .fetch_one(&self.pool);

        let (rows, count) = tokio::join!(page_fut, timeout(COUNT_TIMEOUT, count_fut));

        let rows = rows
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list genres", e))?;

        let count = match count {
            Ok(Ok(total)) => Some(total as u64),
            Ok(Err(e)) => {
                warn!(error = %e, "Genre count query failed; listing without count");
                None
            }
            Err(_) => {
                warn!("Genre count query timed out; listing without count");
                None
            }
        };

        Ok((rows, count))
    }

    /// Soft-delete a genre by id.
    pub async fn soft_delete(&self, id: i64) -> AppResult<()> {
        sqlx::query("UPDATE genres SET state = FALSE, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete genre", e))?;

        Ok(())
    }
}
