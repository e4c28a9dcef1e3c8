//! Build Records

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use rigcheck::builds::{Build, BuildItem, BuildStatus, BuildUuid, UserUuid};
use sqlx::{FromRow, Row, postgres::PgRow, types::Json};

/// Build row as stored in the `builds` table.
#[derive(Debug, Clone)]
pub struct BuildRecord {
    pub uuid: BuildUuid,
    pub owner: UserUuid,
    pub name: String,
    pub status: BuildStatus,
    pub components: Vec<BuildItem>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<BuildRecord> for Build {
    fn from(record: BuildRecord) -> Self {
        Self {
            uuid: record.uuid,
            owner: record.owner,
            name: record.name,
            status: record.status,
            items: record.components,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

impl<'r> FromRow<'r, PgRow> for BuildRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        let status = status.parse().map_err(|e| sqlx::Error::ColumnDecode {
            index: "status".to_string(),
            source: Box::new(e),
        })?;

        let Json(components) = row.try_get::<Json<Vec<BuildItem>>, _>("components")?;

        Ok(Self {
            uuid: BuildUuid::from_uuid(row.try_get("uuid")?),
            owner: UserUuid::from_uuid(row.try_get("owner_uuid")?),
            name: row.try_get("name")?,
            status,
            components,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
