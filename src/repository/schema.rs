//! Catalog and ledger table provisioning

use sqlx::{Pool, Postgres};

use crate::error::{AppError, AppResult};

/// Key for the advisory lock serializing concurrent `ensure` calls
const SCHEMA_LOCK_KEY: i64 = 0x4c49_4253_544f_5245;

const STATEMENTS: &[(&str, &str)] = &[
    (
        "books table",
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id SERIAL PRIMARY KEY,
            available BOOLEAN NOT NULL,
            title TEXT NOT NULL,
            reserved_at TEXT NOT NULL DEFAULT ''
        )
        "#,
    ),
    (
        "requests table",
        r#"
        CREATE TABLE IF NOT EXISTS requests (
            id SERIAL PRIMARY KEY,
            email TEXT NOT NULL,
            title TEXT NOT NULL
        )
        "#,
    ),
    (
        "books title index",
        "CREATE INDEX IF NOT EXISTS idx_books_title ON books (title)",
    ),
    (
        "requests title index",
        "CREATE INDEX IF NOT EXISTS idx_requests_title ON requests (title)",
    ),
];

#[derive(Clone)]
pub struct SchemaManager {
    pool: Pool<Postgres>,
}

impl SchemaManager {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Create the books and requests tables if they do not exist yet.
    /// Safe to call on every start.
    pub async fn ensure(&self) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(SCHEMA_LOCK_KEY)
            .execute(&mut *tx)
            .await?;

        for &(object, ddl) in STATEMENTS {
            sqlx::query(ddl)
                .execute(&mut *tx)
                .await
                .map_err(|source| AppError::Schema { object, source })?;
        }

        tx.commit().await?;

        Ok(())
    }
}
