//! Database connection management

use sqlx::{PgPool, Postgres, Transaction, migrate::MigrateError};
use tracing::info;

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin a transaction. It rolls back unless committed before being dropped.
    ///
    /// # Errors
    ///
    /// Returns an error when no connection can be acquired or `BEGIN` fails.
    pub async fn begin_transaction(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_uri: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_uri).await
}

/// Apply the embedded schema migrations. Already-applied migrations are skipped.
///
/// # Errors
///
/// Returns an error if a migration fails or the applied history diverges from
/// the embedded one.
pub async fn init_db(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await?;

    info!("database schema is up to date");

    Ok(())
}
