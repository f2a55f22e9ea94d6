//! # Database Migrations
//!
//! Embedded SQL migrations for Emporia.
//!
//! The schema and the eleven stored procedures ship inside the binary; a
//! fresh database becomes fully usable the first time the application or
//! the `seed` binary starts.
//!
//! ## Adding New Migrations
//!
//! 1. Create a new file in `migrations/postgres/` with the next sequence
//!    number, named `NNN_description.sql`
//! 2. Never modify an applied migration; always add a new one
//!    (`sqlx` tracks checksums in `_sqlx_migrations`)

use sqlx::PgConnection;
use tracing::info;

use crate::error::DbResult;

/// Embedded migrations from the `migrations/postgres` directory.
///
/// `sqlx::migrate!()` embeds the SQL files at compile time; no runtime
/// file access is needed.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/postgres");

/// Runs all pending migrations on the gateway's connection.
///
/// Idempotent and ordered: applied migrations are recorded in
/// `_sqlx_migrations` and skipped on subsequent runs.
pub async fn run(conn: &mut PgConnection) -> DbResult<()> {
    info!("checking for pending migrations");
    MIGRATOR.run(conn).await?;
    info!("all migrations applied");
    Ok(())
}

/// Number of embedded migrations, for diagnostics.
pub fn embedded_count() -> usize {
    MIGRATOR.migrations.len()
}
