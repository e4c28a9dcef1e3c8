//! Builds

pub mod data;
pub mod errors;
pub mod records;
mod repository;
pub mod service;

pub use errors::BuildsServiceError;
pub use repository::{BuildsRepository, MockBuildsRepository, PgBuildsRepository};
pub use service::*;
