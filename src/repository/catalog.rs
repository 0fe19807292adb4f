//! Catalog (books table) repository
//!
//! Requests reference books by title. Every title lookup the reservation
//! engine performs goes through [`CatalogRepository::lock_by_title`] and
//! [`CatalogRepository::release_by_title`], so switching to id-based joins
//! only touches this file.

use sqlx::{PgConnection, Pool, Postgres};

use crate::{error::AppResult, models::item::Item};

const ITEM_COLUMNS: &str = "id, available, title, reserved_at";

/// Key for the advisory lock serializing catalog seeding across processes
const SEED_LOCK_KEY: i64 = 0x4c49_4253_5345_4544;

#[derive(Clone)]
pub struct CatalogRepository {
    pool: Pool<Postgres>,
}

impl CatalogRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Read the book with `title` and hold its row lock until the
    /// surrounding transaction ends. Duplicate titles resolve to the lowest id.
    pub async fn lock_by_title(conn: &mut PgConnection, title: &str) -> AppResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(&format!(
            "SELECT {} FROM books WHERE title = $1 ORDER BY id LIMIT 1 FOR UPDATE",
            ITEM_COLUMNS
        ))
        .bind(title)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(item)
    }

    /// Flag a book as reserved at `reserved_at` and return its new state
    pub async fn mark_reserved(
        conn: &mut PgConnection,
        id: i32,
        reserved_at: &str,
    ) -> AppResult<Item> {
        let item = sqlx::query_as::<_, Item>(&format!(
            "UPDATE books SET available = false, reserved_at = $1 WHERE id = $2 RETURNING {}",
            ITEM_COLUMNS
        ))
        .bind(reserved_at)
        .bind(id)
        .fetch_one(&mut *conn)
        .await?;

        Ok(item)
    }

    /// Make the book(s) with `title` available again. Returns the number of
    /// rows touched, which is zero when the title no longer exists.
    pub async fn release_by_title(conn: &mut PgConnection, title: &str) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE books SET available = true, reserved_at = '' WHERE title = $1",
        )
        .bind(title)
        .execute(&mut *conn)
        .await?;

        Ok(result.rows_affected())
    }

    /// Insert a book
    pub async fn insert(conn: &mut PgConnection, title: &str, available: bool) -> AppResult<Item> {
        let item = sqlx::query_as::<_, Item>(&format!(
            "INSERT INTO books (available, title) VALUES ($1, $2) RETURNING {}",
            ITEM_COLUMNS
        ))
        .bind(available)
        .bind(title)
        .fetch_one(&mut *conn)
        .await?;

        Ok(item)
    }

    /// Take the seeding lock for the rest of the transaction and return the
    /// number of books already present
    pub async fn lock_for_seeding(conn: &mut PgConnection) -> AppResult<i64> {
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(SEED_LOCK_KEY)
            .execute(&mut *conn)
            .await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&mut *conn)
            .await?;
        Ok(count)
    }

    /// Get a book by title without locking
    pub async fn get_by_title(&self, title: &str) -> AppResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(&format!(
            "SELECT {} FROM books WHERE title = $1 ORDER BY id LIMIT 1",
            ITEM_COLUMNS
        ))
        .bind(title)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Count catalog entries
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Check database connectivity
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
