//! Parts Repository

use rigcheck::parts::{Part, PartCategory, PartUuid};
use sqlx::{PgPool, Postgres, query_as, query_scalar, types::Json};
use uuid::Uuid;

use crate::domain::parts::{data::PartsFilter, records::PartRecord};

const LIST_PARTS_SQL: &str = include_str!("sql/list_parts.sql");
const GET_PART_SQL: &str = include_str!("sql/get_part.sql");
const GET_PARTS_SQL: &str = include_str!("sql/get_parts.sql");
const LIST_CATEGORIES_SQL: &str = include_str!("sql/list_categories.sql");
const UPSERT_PART_SQL: &str = include_str!("sql/upsert_part.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPartsRepository;

impl PgPartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_parts(
        &self,
        pool: &PgPool,
        filter: &PartsFilter,
    ) -> Result<Vec<PartRecord>, sqlx::Error> {
        query_as::<Postgres, PartRecord>(LIST_PARTS_SQL)
            .bind(filter.category.map(PartCategory::as_str))
            .bind(filter.min_price)
            .bind(filter.max_price)
            .bind(filter.sort_by.as_str())
            .bind(filter.sort_order.as_str())
            .bind(i64::from(filter.limit()))
            .bind(i64::from(filter.skip))
            .fetch_all(pool)
            .await
    }

    pub(crate) async fn get_part(
        &self,
        pool: &PgPool,
        part: PartUuid,
    ) -> Result<PartRecord, sqlx::Error> {
        query_as::<Postgres, PartRecord>(GET_PART_SQL)
            .bind(part.into_uuid())
            .fetch_one(pool)
            .await
    }

    pub(crate) async fn get_parts(
        &self,
        pool: &PgPool,
        parts: &[PartUuid],
    ) -> Result<Vec<PartRecord>, sqlx::Error> {
        let uuids: Vec<Uuid> = parts.iter().map(|part| part.into_uuid()).collect();

        query_as::<Postgres, PartRecord>(GET_PARTS_SQL)
            .bind(uuids)
            .fetch_all(pool)
            .await
    }

    pub(crate) async fn list_categories(&self, pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        query_scalar::<Postgres, String>(LIST_CATEGORIES_SQL)
            .fetch_all(pool)
            .await
    }

    pub(crate) async fn upsert_part(
        &self,
        pool: &PgPool,
        part: &Part,
    ) -> Result<PartRecord, sqlx::Error> {
        query_as::<Postgres, PartRecord>(UPSERT_PART_SQL)
            .bind(part.uuid.into_uuid())
            .bind(part.category().as_str())
            .bind(&part.name)
            .bind(part.manufacturer.as_deref())
            .bind(part.price)
            .bind(Json(&part.spec))
            .fetch_one(pool)
            .await
    }
}
