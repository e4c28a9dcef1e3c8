//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        builds::{BuildsService, GatedBuildsService, PgBuildsRepository},
        parts::{PartsService, PgPartsService},
        payments::{PaymentVerifier, RejectAllVerifier},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub parts: Arc<dyn PartsService>,
    pub builds: Arc<dyn BuildsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// Paying for a build needs a gateway verifier; without one every confirmation is refused.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::from_db(Db::new(pool), Arc::new(RejectAllVerifier)))
    }

    /// Wire the services over an existing database handle.
    #[must_use]
    pub fn from_db(db: Db, payments: Arc<dyn PaymentVerifier>) -> Self {
        let parts: Arc<dyn PartsService> = Arc::new(PgPartsService::new(db.clone()));

        let builds = GatedBuildsService::new(
            Arc::new(PgBuildsRepository::new(db)),
            Arc::clone(&parts),
            payments,
        );

        Self {
            parts,
            builds: Arc::new(builds),
        }
    }
}
