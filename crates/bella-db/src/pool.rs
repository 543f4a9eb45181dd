//! # Database Pool
//!
//! Opens the SQLite file behind the admin session and hands out the
//! key-value store built on it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DbConfig::new(path)        DbConfig::in_memory()                       │
//! │       │   pool of 5              │   pool of 1 (one private database)   │
//! │       └──────────────┬───────────┘                                      │
//! │                      ▼                                                  │
//! │  Database::new(config).await                                            │
//! │       • open or create the file (WAL, NORMAL sync)                      │
//! │       • apply pending migrations                                        │
//! │                      │                                                  │
//! │                      ▼                                                  │
//! │  db.kv() ──► SqliteKeyValueStore ──► session store                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! WAL keeps a slow reader from blocking the login write.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

use crate::error::{DbError, DbResult};
use crate::kv::SqliteKeyValueStore;
use crate::migrations;

// =============================================================================
// Configuration
// =============================================================================

/// Where the database lives and how many connections may share it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub database_path: PathBuf,
    pub max_connections: u32,
}

impl DbConfig {
    /// A file-backed database. The file is created on first connect.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            max_connections: 5,
        }
    }

    /// A throwaway database for tests.
    ///
    /// Every SQLite connection to `:memory:` opens its own empty database, so
    /// the pool is pinned to one connection. Clone the resulting `Database`
    /// to share it.
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(":memory:"),
            max_connections: 1,
        }
    }
}

// =============================================================================
// Database
// =============================================================================

/// Handle to the pool. Clones share it, so stores built on clones of one
/// `Database` see the same rows.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connects and brings the schema up to date.
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(path = %config.database_path.display(), "Opening database");

        let connect_url = format!("sqlite://{}?mode=rwc", config.database_path.display());
        let connect_options = SqliteConnectOptions::from_str(&connect_url)
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        info!(max_connections = config.max_connections, "Database pool created");

        migrations::run_migrations(&pool).await?;
        Ok(Database { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// The durable key-value store backed by this database.
    pub fn kv(&self) -> SqliteKeyValueStore {
        SqliteKeyValueStore::new(self.pool.clone())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
