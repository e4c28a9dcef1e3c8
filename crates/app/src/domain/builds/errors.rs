//! Builds service errors.

use rigcheck::{builds::BuildError, compatibility::ConstraintViolation, parts::PartUuid};
use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::{parts::PartsServiceError, payments::PaymentError};

#[derive(Debug, Error)]
pub enum BuildsServiceError {
    #[error("build not found")]
    NotFound,

    #[error("build already exists")]
    AlreadyExists,

    #[error("part {0} not found in catalog")]
    PartNotFound(PartUuid),

    #[error(transparent)]
    InvalidItem(#[from] BuildError),

    #[error(transparent)]
    Incompatible(#[from] ConstraintViolation),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error("catalog error")]
    Parts(#[source] PartsServiceError),

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for BuildsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::CheckViolation | ErrorKind::NotNullViolation) => Self::InvalidData,
            Some(ErrorKind::ForeignKeyViolation | ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

impl From<PartsServiceError> for BuildsServiceError {
    fn from(error: PartsServiceError) -> Self {
        Self::Parts(error)
    }
}
