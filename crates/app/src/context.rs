//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::products::{PgProductsService, ProductsService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to initialise database schema")]
    Migration(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    /// Build an application context around an existing products service.
    #[must_use]
    pub fn new(products: Arc<dyn ProductsService>) -> Self {
        Self { products }
    }

    /// Build application context from a database URI, applying migrations.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting or initialising the schema fails.
    pub async fn from_database_uri(uri: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(uri)
            .await
            .map_err(AppInitError::Database)?;

        database::init_db(&pool)
            .await
            .map_err(AppInitError::Migration)?;

        Ok(Self::new(Arc::new(PgProductsService::new(Db::new(pool)))))
    }
}
