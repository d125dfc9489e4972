//! Session state storage for wizard dialogues.
//!
//! Wizard snapshots are JSON strings keyed by `(namespace, key)` in a
//! store that outlives any single request. The [`StateStore`] trait is
//! the seam between the wizard core and the actual store: SQLite in
//! production, in-memory for tests and embedders.

pub mod error;
pub mod state_store;

pub use {
    error::{Error, Result},
    state_store::{MemoryStateStore, SqliteStateStore, StateStore},
};

/// Run database migrations for the sessions crate.
///
/// Creates the `wizard_state` table. Call at application startup before
/// constructing a [`SqliteStateStore`] over the pool.
pub async fn run_migrations(pool: &sqlx::SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
