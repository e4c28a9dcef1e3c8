//! Parts service.

use async_trait::async_trait;
use mockall::automock;
use rigcheck::{
    catalog::Catalog,
    parts::{Part, PartCategory, PartUuid},
};
use tracing::{Span, debug, warn};

use crate::{
    database::Db,
    domain::parts::{
        data::PartsFilter, errors::PartsServiceError, repository::PgPartsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgPartsService {
    db: Db,
    repository: PgPartsRepository,
}

impl PgPartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgPartsRepository::new(),
        }
    }
}

#[async_trait]
impl PartsService for PgPartsService {
    #[tracing::instrument(
        name = "parts.service.list_parts",
        skip(self),
        fields(part_count = tracing::field::Empty),
        err
    )]
    async fn list_parts(&self, filter: PartsFilter) -> Result<Vec<Part>, PartsServiceError> {
        let records = self.repository.list_parts(self.db.pool(), &filter).await?;

        Span::current().record("part_count", records.len());

        Ok(records.into_iter().map(Part::from).collect())
    }

    async fn list_categories(&self) -> Result<Vec<PartCategory>, PartsServiceError> {
        let names = self.repository.list_categories(self.db.pool()).await?;

        let mut categories: Vec<PartCategory> = names
            .iter()
            .filter_map(|name| match name.parse() {
                Ok(category) => Some(category),
                Err(error) => {
                    warn!(%error, "skipping stored part category");
                    None
                }
            })
            .collect();

        categories.sort();

        Ok(categories)
    }

    async fn get_part(&self, part: PartUuid) -> Result<Part, PartsServiceError> {
        let record = self.repository.get_part(self.db.pool(), part).await?;

        Ok(record.into())
    }

    #[tracing::instrument(
        name = "parts.service.get_parts",
        skip(self, parts),
        fields(
            requested = parts.len(),
            resolved = tracing::field::Empty
        ),
        err
    )]
    async fn get_parts(&self, parts: Vec<PartUuid>) -> Result<Catalog, PartsServiceError> {
        let records = self.repository.get_parts(self.db.pool(), &parts).await?;

        Span::current().record("resolved", records.len());

        Ok(records.into_iter().map(Part::from).collect())
    }

    #[tracing::instrument(
        name = "parts.service.upsert_part",
        skip(self, part),
        fields(part_uuid = %part.uuid, category = %part.category()),
        err
    )]
    async fn upsert_part(&self, part: Part) -> Result<Part, PartsServiceError> {
        let record = self.repository.upsert_part(self.db.pool(), &part).await?;

        debug!(part_uuid = %record.uuid, "upserted part");

        Ok(record.into())
    }
}

#[automock]
#[async_trait]
pub trait PartsService: Send + Sync {
    /// Lists catalog parts matching a filter, one page at a time.
    async fn list_parts(&self, filter: PartsFilter) -> Result<Vec<Part>, PartsServiceError>;

    /// Distinct categories present in the catalog.
    async fn list_categories(&self) -> Result<Vec<PartCategory>, PartsServiceError>;

    /// Retrieve a single part.
    async fn get_part(&self, part: PartUuid) -> Result<Part, PartsServiceError>;

    /// Resolve a batch of parts. Unknown identifiers are simply absent from the result.
    async fn get_parts(&self, parts: Vec<PartUuid>) -> Result<Catalog, PartsServiceError>;

    /// Insert a part, or replace the part with the same identifier.
    async fn upsert_part(&self, part: Part) -> Result<Part, PartsServiceError>;
}
