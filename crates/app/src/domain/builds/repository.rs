//! Builds Repository
//!
//! Every mutation is a single statement against the build row, so concurrent edits of one build
//! cannot lose each other's items.

use async_trait::async_trait;
use mockall::automock;
use rigcheck::{
    builds::{Build, BuildItem, BuildStatus, BuildUuid, UserUuid},
    parts::PartUuid,
};
use sqlx::{Postgres, query_as, types::Json};

use crate::{
    database::Db,
    domain::builds::{data::NewBuild, records::BuildRecord},
};

const GET_BUILD_SQL: &str = include_str!("sql/get_build.sql");
const FIND_DRAFT_SQL: &str = include_str!("sql/find_draft.sql");
const LIST_BUILDS_SQL: &str = include_str!("sql/list_builds.sql");
const CREATE_BUILD_SQL: &str = include_str!("sql/create_build.sql");
const APPEND_ITEM_SQL: &str = include_str!("sql/append_item.sql");
const REMOVE_PART_SQL: &str = include_str!("sql/remove_part.sql");
const SET_STATUS_SQL: &str = include_str!("sql/set_status.sql");

#[automock]
#[async_trait]
pub trait BuildsRepository: Send + Sync {
    /// Fetch a build owned by `owner`.
    async fn get_build(&self, build: BuildUuid, owner: UserUuid) -> Result<Build, sqlx::Error>;

    /// The owner's oldest draft, if any.
    async fn find_draft(&self, owner: UserUuid) -> Result<Option<Build>, sqlx::Error>;

    /// Every build the owner has, oldest first.
    async fn list_builds(&self, owner: UserUuid) -> Result<Vec<Build>, sqlx::Error>;

    /// Insert an empty draft.
    async fn create_build(&self, build: NewBuild) -> Result<Build, sqlx::Error>;

    /// Append an item to the end of the build.
    async fn append_item(
        &self,
        build: BuildUuid,
        owner: UserUuid,
        item: BuildItem,
    ) -> Result<Build, sqlx::Error>;

    /// Drop every item referencing `part`, keeping the order of the rest.
    async fn remove_part(
        &self,
        build: BuildUuid,
        owner: UserUuid,
        part: PartUuid,
    ) -> Result<Build, sqlx::Error>;

    /// Move the build to another lifecycle state.
    async fn set_status(
        &self,
        build: BuildUuid,
        owner: UserUuid,
        status: BuildStatus,
    ) -> Result<Build, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgBuildsRepository {
    db: Db,
}

impl PgBuildsRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BuildsRepository for PgBuildsRepository {
    async fn get_build(&self, build: BuildUuid, owner: UserUuid) -> Result<Build, sqlx::Error> {
        let record = query_as::<Postgres, BuildRecord>(GET_BUILD_SQL)
            .bind(build.into_uuid())
            .bind(owner.into_uuid())
            .fetch_one(self.db.pool())
            .await?;

        Ok(record.into())
    }

    async fn find_draft(&self, owner: UserUuid) -> Result<Option<Build>, sqlx::Error> {
        let record = query_as::<Postgres, BuildRecord>(FIND_DRAFT_SQL)
            .bind(owner.into_uuid())
            .fetch_optional(self.db.pool())
            .await?;

        Ok(record.map(Build::from))
    }

    async fn list_builds(&self, owner: UserUuid) -> Result<Vec<Build>, sqlx::Error> {
        let records = query_as::<Postgres, BuildRecord>(LIST_BUILDS_SQL)
            .bind(owner.into_uuid())
            .fetch_all(self.db.pool())
            .await?;

        Ok(records.into_iter().map(Build::from).collect())
    }

    async fn create_build(&self, build: NewBuild) -> Result<Build, sqlx::Error> {
        let record = query_as::<Postgres, BuildRecord>(CREATE_BUILD_SQL)
            .bind(build.uuid.into_uuid())
            .bind(build.owner.into_uuid())
            .bind(&build.name)
            .fetch_one(self.db.pool())
            .await?;

        Ok(record.into())
    }

    async fn append_item(
        &self,
        build: BuildUuid,
        owner: UserUuid,
        item: BuildItem,
    ) -> Result<Build, sqlx::Error> {
        let record = query_as::<Postgres, BuildRecord>(APPEND_ITEM_SQL)
            .bind(build.into_uuid())
            .bind(owner.into_uuid())
            .bind(Json(&item))
            .fetch_one(self.db.pool())
            .await?;

        Ok(record.into())
    }

    async fn remove_part(
        &self,
        build: BuildUuid,
        owner: UserUuid,
        part: PartUuid,
    ) -> Result<Build, sqlx::Error> {
        let record = query_as::<Postgres, BuildRecord>(REMOVE_PART_SQL)
            .bind(build.into_uuid())
            .bind(owner.into_uuid())
            .bind(part.to_string())
            .fetch_one(self.db.pool())
            .await?;

        Ok(record.into())
    }

    async fn set_status(
        &self,
        build: BuildUuid,
        owner: UserUuid,
        status: BuildStatus,
    ) -> Result<Build, sqlx::Error> {
        let record = query_as::<Postgres, BuildRecord>(SET_STATUS_SQL)
            .bind(build.into_uuid())
            .bind(owner.into_uuid())
            .bind(status.as_str())
            .fetch_one(self.db.pool())
            .await?;

        Ok(record.into())
    }
}
