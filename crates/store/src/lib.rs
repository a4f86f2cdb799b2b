//! Persistence layer: SQLite-backed storage for accounts and samples.
//!
//! The store hands out one [`Session`] per request — a pooled connection
//! used for every read and write of that request and released when the
//! session is dropped. All SQL lives in this crate; the API layer only
//! sees domain types and [`StoreError`].

use std::str::FromStr;

use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool};

pub mod accounts;
pub mod error;
pub mod samples;


pub use error::StoreError;

/// Shared handle to the database pool.
///
/// `SqlitePool` is `Send + Sync` and cheap to clone, so `Store` can be
/// cloned freely across handler tasks.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open (and if necessary create) the database at `url`, then ensure
    /// the schema exists.
    ///
    /// In-memory databases are clamped to a single connection: every pooled
    /// connection to `sqlite::memory:` would otherwise get its own empty
    /// database.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let max_connections = if url.contains(":memory:") || url.contains("mode=memory") {
            1
        } else {
            5
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Acquire a request-scoped unit of work.
    pub async fn session(&self) -> Result<Session, StoreError> {
        let conn = self.pool.acquire().await?;
        Ok(Session { conn })
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS accounts (
                id   INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS samples (
                id              INTEGER PRIMARY KEY AUTOINCREMENT,
                sample_label    TEXT NOT NULL UNIQUE,
                proposal_number TEXT NOT NULL,
                inner_diameter  REAL NOT NULL,
                outer_diameter  REAL NOT NULL,
                owner_id        INTEGER NOT NULL REFERENCES accounts(id)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_samples_proposal ON samples(proposal_number)")
            .execute(&self.pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_samples_owner ON samples(owner_id)")
            .execute(&self.pool)
            .await?;

        tracing::debug!("database schema ensured");
        Ok(())
    }
}

/// One request's unit of work: an exclusively held pooled connection.
///
/// Dropping the session returns the connection to the pool, so release is
/// unconditional on both the success and failure paths.
pub struct Session {
    conn: PoolConnection<Sqlite>,
}

impl Session {
    pub(crate) fn conn(&mut self) -> &mut sqlx::SqliteConnection {
        &mut self.conn
    }
}
