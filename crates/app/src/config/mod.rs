//! Configuration shared by the CLI commands.

pub mod db;
pub mod observability;

pub use db::DatabaseConfig;
pub use observability::{LogFormat, LoggingConfig};
