//! Shared application services and persistence for rigcheck.

pub mod config;
pub mod context;
pub mod database;
pub mod domain;
pub mod observability;

#[cfg(all(test, feature = "docker-tests"))]
mod test;
