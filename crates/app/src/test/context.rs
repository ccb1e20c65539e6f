//! Test context for service-level integration tests.

use crate::{database::Db, domain::orders::PgOrdersService, health::PgHealthService};

use super::db::TestDb;

pub struct TestContext {
    pub db: TestDb,
    pub orders: PgOrdersService,
    pub health: PgHealthService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            orders: PgOrdersService::new(db.clone()),
            health: PgHealthService::new(db),
            db: test_db,
        }
    }
}
