//! # bella-db: Durable Storage for Bella Vista
//!
//! A small key-value store on SQLite. The only durable state in the system is
//! the admin session, so there are no repositories: one table, one trait.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  bella-app SessionStore (login / logout / restore)                     │
//! │       │  Arc<dyn KeyValueStore>                                        │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     bella-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │ KeyValueStore │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │◄───│    (kv.rs)    │    │  (embedded)  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file in the platform data dir (bella.db)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bella_db::{Database, DbConfig, KeyValueStore};
//!
//! let db = Database::new(DbConfig::new("bella.db")).await?;
//! let kv = db.kv();
//! kv.set_all(&[("admin-token", "..."), ("admin-user", "{...}")]).await?;
//! ```

pub mod error;
pub mod kv;
pub mod migrations;
pub mod pool;

pub use error::{DbError, DbResult};
pub use kv::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore};
pub use pool::{Database, DbConfig};
