//! Test context for service-level integration tests.

use std::sync::Arc;

use crate::{
    database::Db,
    domain::{
        builds::{GatedBuildsService, PgBuildsRepository},
        parts::PgPartsService,
        payments::RejectAllVerifier,
    },
};

use super::db::TestDb;

/// Services wired against a fresh, migrated database.
pub(crate) struct TestContext {
    pub db: TestDb,
    pub parts: PgPartsService,
    pub build_repository: PgBuildsRepository,
    pub builds: GatedBuildsService,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        let parts = PgPartsService::new(db.clone());
        let build_repository = PgBuildsRepository::new(db);

        let builds = GatedBuildsService::new(
            Arc::new(build_repository.clone()),
            Arc::new(parts.clone()),
            Arc::new(RejectAllVerifier),
        );

        Self {
            db: test_db,
            parts,
            build_repository,
            builds,
        }
    }
}
