//! Part Records

use rigcheck::parts::{Part, PartSpec, PartUuid};
use rust_decimal::Decimal;
use sqlx::{FromRow, Row, postgres::PgRow, types::Json};

/// Part row as stored in the `parts` table.
#[derive(Debug, Clone)]
pub struct PartRecord {
    pub uuid: PartUuid,
    pub name: String,
    pub manufacturer: Option<String>,
    pub price: Decimal,
    pub spec: PartSpec,
}

impl From<PartRecord> for Part {
    fn from(record: PartRecord) -> Self {
        Self {
            uuid: record.uuid,
            name: record.name,
            manufacturer: record.manufacturer,
            price: record.price,
            spec: record.spec,
        }
    }
}

impl<'r> FromRow<'r, PgRow> for PartRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let Json(spec) = row.try_get::<Json<PartSpec>, _>("spec")?;

        Ok(Self {
            uuid: PartUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            manufacturer: row.try_get("manufacturer")?,
            price: row.try_get("price")?,
            spec,
        })
    }
}
