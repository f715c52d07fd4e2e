//! Actor repository implementation.

use std::time::Duration;

use sqlx::PgPool;
use tokio::time::timeout;
use tracing::warn;

use cinevault_core::error::{AppError, ErrorKind};
use cinevault_core::result::AppResult;
use cinevault_core::types::pagination::PageRequest;
use cinevault_entity::actor::{Actor, CreateActor, UpdateActor};

/// How long the concurrent total-count query may run before the listing
/// gives up on it and answers without a count.
const COUNT_TIMEOUT: Duration = Duration::from_secs(5);

/// Repository for actor CRUD operations.
#[derive(Debug, Clone)]
pub struct ActorRepository {
    pool: PgPool,
}

impl ActorRepository {
    /// Create a new actor repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an active actor by exact name.
    pub async fn find_active_by_name(&self, name: &str) -> AppResult<Option<Actor>> {
        sqlx::query_as::<_, Actor>("SELECT * FROM actors WHERE name = $1 AND state = TRUE")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find actor by name", e)
            })
    }

    /// Insert a new active actor.
    ///
    /// Rejects the insert when an active actor with the same name already
    /// exists. The lookup and the insert are two separate statements, so
    /// concurrent inserts of the same name can both pass the check.
    pub async fn insert(&self, data: &CreateActor) -> AppResult<Actor> {
        if self.find_active_by_name(&data.name).await?.is_some() {
            return Err(AppError::conflict(format!(
                "An active actor named '{}' already exists",
                data.name
            )));
        }

        sqlx::query_as::<_, Actor>(
            "INSERT INTO actors (name, birthdate, avatar, state) \
             VALUES ($1, $2, $3, TRUE) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(data.birthdate)
        .bind(&data.avatar)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create actor", e))
    }

    /// Update an actor's scalar fields by id.
    ///
    /// The avatar column is only touched when a new URL is supplied;
    /// `None` keeps the stored value.
    pub async fn update(&self, data: &UpdateActor) -> AppResult<()> {
        sqlx::query(
            "UPDATE actors SET name = $2, \
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
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update actor", e))?;

        Ok(())
    }

    /// List active actors for one page, with the total active count
    /// fetched concurrently.
    ///
    /// Both queries are joined before returning; if the count exceeds
    /// [`COUNT_TIMEOUT`] or fails, the page is returned without it.
    pub async fn list(&self, page: &PageRequest) -> AppResult<(Vec<Actor>, Option<u64>)> {
        let page_fut = sqlx::query_as::<_, Actor>(
            "SELECT * FROM actors WHERE state = TRUE ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool);

        let count_fut = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM actors WHERE state = TRUE")
            .fetch_one(&self.pool);

        let (rows, count) = tokio::join!(page_fut, timeout(COUNT_TIMEOUT, count_fut));

        let rows = rows
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list actors", e))?;

        let count = match count {
            Ok(Ok(total)) => Some(total as u64),
            Ok(Err(e)) => {
                warn!(error = %e, "Actor count query failed; listing without count");
                None
            }
            Err(_) => {
                warn!("Actor count query timed out; listing without count");
                None
            }
        };

        Ok((rows, count))
    }

    /// Soft-delete an actor by id.
    ///
    /// Succeeds as long as the statement runs; an unknown or already
    /// inactive id is not distinguished from a real deletion.
    pub async fn soft_delete(&self, id: i64) -> AppResult<()> {
        sqlx::query("UPDATE actors SET state = FALSE, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete actor", e))?;

        Ok(())
    }
}
