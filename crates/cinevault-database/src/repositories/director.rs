//! Director repository implementation.

use std::time::Duration;

use sqlx::PgPool;
use tokio::time::timeout;
use tracing::warn;

use cinevault_core::error::{AppError, ErrorKind};
use cinevault_core::result::AppResult;
use cinevault_core::types::pagination::PageRequest;
use cinevault_entity::director::{CreateDirector, Director, UpdateDirector};

const COUNT_TIMEOUT: Duration = Duration::from_secs(5);

/// Repository for director CRUD operations.
#[derive(Debug, Clone)]
pub struct DirectorRepository {
    pool: PgPool,
}

impl DirectorRepository {
    /// Create a new director repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an active director by exact name.
    pub async fn find_active_by_name(&self, name: &str) -> AppResult<Option<Director>> {
        sqlx::query_as::<_, Director>("SELECT * FROM directors WHERE name = $1 AND state = TRUE")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find director by name", e)
            })
    }

    /// Insert a new active director, rejecting duplicates among active
    /// rows. The lookup and the insert are two separate statements.
    pub async fn insert(&self, data: &CreateDirector) -> AppResult<Director> {
        if self.find_active_by_name(&data.name).await?.is_some() {
            return Err(AppError::conflict(format!(
                "An active director named '{}' already exists",
                data.name
            )));
        }

        sqlx::query_as::<_, Director>(
            "INSERT INTO directors (name, birthdate, avatar, state) \
             VALUES ($1, $2, $3, TRUE) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(data.birthdate)
        .bind(&data.avatar)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create director", e))
    }

    /// Update a director's scalar fields by id; `avatar: None` keeps the
    /// stored value.
    pub async fn update(&self, data: &UpdateDirector) -> AppResult<()> {
        sqlx::query(
            "UPDATE directors SET name = $2, \
                                  birthdate = $3, \
                                  avatar = COALESCE($4, avatar), \
                                  updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(data.id)
        .bind(&data.name)
        .bind(data.birthdate)
        .bind(&data.avatar)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update director", e))?;

        Ok(())
    }

    /// List active directors for one page, with the total active count
    /// fetched concurrently and joined before the response is composed.
    pub async fn list(&self, page: &PageRequest) -> AppResult<(Vec<Director>, Option<u64>)> {
        let page_fut = sqlx::query_as::<_, Director>(
            "SELECT * FROM directors WHERE state = TRUE ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool);

        let count_fut =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM directors WHERE state = TRUE")
                .fetch_one(&self.pool);

        let (rows, count) = tokio::join!(page_fut, timeout(COUNT_TIMEOUT, count_fut));

        let rows = rows.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list directors", e)
        })?;

        let count = match count {
            Ok(Ok(total)) => Some(total as u64),
            Ok(Err(e)) => {
                warn!(error = %e, "Director count query failed; listing without count");
                None
            }
            Err(_) => {
                warn!("Director count query timed out; listing without count");
                None
            }
        };

        Ok((rows, count))
    }

    /// Soft-delete a director by id.
    pub async fn soft_delete(&self, id: i64) -> AppResult<()> {
        sqlx::query("UPDATE directors SET state = FALSE, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete director", e)
            })?;

        Ok(())
    }
}
