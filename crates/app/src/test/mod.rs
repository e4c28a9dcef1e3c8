//! Postgres-backed test support.

mod context;

pub(crate) use context::TestContext;
