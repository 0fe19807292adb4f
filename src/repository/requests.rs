//! Requests repository: the reservation engine
//!
//! Reserving and releasing a book each run in a single transaction. The
//! book row is read with `FOR UPDATE`, so of several transactions racing on
//! the same title only the first sees it available; the others block on the
//! row lock and then read the committed, reserved state. Dropping a
//! transaction without committing (error or cancelled future) rolls it back.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        item::ReservationOutcome,
        request::{NewRequest, Request},
    },
};

use super::catalog::CatalogRepository;

/// Operations the request handlers need from the reservation engine
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Reserve the book titled `request.title` for `request.email`.
    ///
    /// Returns [`ReservationOutcome::Unavailable`] without writing anything
    /// when the book is already reserved, and `NotFound` when no book has
    /// that title.
    async fn create_request(&self, request: &NewRequest) -> AppResult<ReservationOutcome>;

    async fn get_request(&self, id: i32) -> AppResult<Request>;

    /// All open requests in id order
    async fn list_requests(&self) -> AppResult<Vec<Request>>;

    /// Remove a request and make its book available again
    async fn delete_request(&self, id: i32) -> AppResult<()>;
}

#[derive(Clone)]
pub struct RequestsRepository {
    pool: Pool<Postgres>,
}

impl RequestsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationStore for RequestsRepository {
    async fn create_request(&self, request: &NewRequest) -> AppResult<ReservationOutcome> {
        let mut tx = self.pool.begin().await?;

        let Some(item) = CatalogRepository::lock_by_title(&mut tx, &request.title).await? else {
            tx.rollback().await?;
            tracing::debug!(title = %request.title, "No book with requested title");
            return Err(AppError::NotFound("Requested book not found".to_string()));
        };

        if !item.available {
            tx.rollback().await?;
            return Ok(ReservationOutcome::Unavailable { item });
        }

        let reserved_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let item = CatalogRepository::mark_reserved(&mut tx, item.id, &reserved_at).await?;

        let request_id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO requests (email, title) VALUES ($1, $2) RETURNING id",
        )
        .bind(&request.email)
        .bind(&request.title)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(ReservationOutcome::Reserved { item, request_id })
    }

    async fn get_request(&self, id: i32) -> AppResult<Request> {
        sqlx::query_as::<_, Request>("SELECT id, email, title FROM requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Request with id {} not found", id)))
    }

    async fn list_requests(&self) -> AppResult<Vec<Request>> {
        let requests =
            sqlx::query_as::<_, Request>("SELECT id, email, title FROM requests ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(requests)
    }

    async fn delete_request(&self, id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let title: Option<String> =
            sqlx::query_scalar("SELECT title FROM requests WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(title) = title else {
            tx.rollback().await?;
            return Err(AppError::NotFound(format!("Request with id {} not found", id)));
        };

        // Zero rows when the title vanished from the catalog; the request
        // is still removed.
        CatalogRepository::release_by_title(&mut tx, &title).await?;

        sqlx::query("DELETE FROM requests WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
