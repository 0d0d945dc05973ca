//! Test context for service-level integration tests.

use crate::{database::Db, domain::products::PgProductsService};

use super::db::TestDb;

pub struct TestContext {
    pub products: PgProductsService,
    _db: TestDb,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;

        Self {
            products: PgProductsService::new(Db::new(test_db.pool().clone())),
            _db: test_db,
        }
    }
}
