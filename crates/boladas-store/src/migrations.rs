//! # Store Migrations
//!
//! Embedded SQL migrations for the slice store.
//!
//! The schema is deliberately tiny: one `slices` table holding the full
//! JSON payload of each persisted slice. Schema changes in the *payloads*
//! never migrate: a new payload shape gets a fresh, versioned slice key
//! instead (see `slices.rs`), matching the storefront's versioned-key
//! pattern.
//!
//! ## Adding New Migrations
//! 1. Create a new file in `migrations/sqlite/` with the next sequence number
//! 2. Name format: `NNN_description.sql`
//! 3. NEVER modify existing migrations - always add new ones

use sqlx::SqlitePool;
use tracing::info;

use crate::error::StoreResult;

/// Embedded migrations from the `migrations/sqlite` directory.
///
/// The `sqlx::migrate!()` macro embeds the SQL files into the binary at
/// compile time; no runtime file access is needed.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Runs all pending migrations in order.
///
/// Idempotent and transactional: applied migrations are tracked in
/// `_sqlx_migrations` and never re-run.
pub async fn run_migrations(pool: &SqlitePool) -> StoreResult<()> {
    info!("Checking for pending migrations");

    MIGRATOR.run(pool).await?;

    info!("All migrations applied");
    Ok(())
}
