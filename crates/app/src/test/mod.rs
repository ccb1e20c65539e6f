//! Service-level test infrastructure backed by a shared `PostgreSQL` container.

mod context;

pub(crate) use context::TestContext;
pub(crate) use db::TestDb;
