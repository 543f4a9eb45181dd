//! # Bella Vista Application Library
//!
//! Application layer for the Bella Vista restaurant site: shared state,
//! the admin session, and one command function per user intent.
//!
//! ## Module Organization
//! ```text
//! bella_app/
//! ├── lib.rs          ◄─── You are here (startup & wiring)
//! ├── auth.rs         ◄─── CredentialVerifier seam
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart state management
//! │   ├── catalog.rs  ◄─── Menu + events
//! │   ├── orders.rs   ◄─── Order board
//! │   ├── session.rs  ◄─── Admin session (durable)
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Admin gate
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── checkout.rs ◄─── Order submission
//! │   ├── contact.rs  ◄─── Contact form
//! │   ├── menu.rs     ◄─── Menu browsing/editing
//! │   ├── events.rs   ◄─── Event listing/editing
//! │   ├── orders.rs   ◄─── Admin order board
//! │   ├── session.rs  ◄─── Login/logout
//! │   └── config.rs   ◄─── Config retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management (Multiple State Types)
//! There is no single `AppState`. [`AppContext`] just holds one handle of
//! each kind so a host can pass the right ones to each command:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │  CartState   │ │ CatalogState │ │  OrderState  │ │ SessionState │   │
//! │  │  • lines     │ │  • menu      │ │  • open      │ │  • identity  │   │
//! │  │  • totals    │ │  • events    │ │    orders    │ │  • kv store  │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │                                                                         │
//! │  Each command only requests the state it needs.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod commands;
pub mod error;
pub mod state;

use std::path::PathBuf;
use std::sync::Arc;

use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bella_db::{Database, DbConfig, KeyValueStore};
use state::{CartState, CatalogState, ConfigState, OrderState, SessionState, SessionStore};

/// One handle of every state type, wired to the same storage.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Arc<ConfigState>,
    pub cart: CartState,
    pub catalog: CatalogState,
    pub orders: OrderState,
    pub session: SessionState,
}

impl AppContext {
    /// Builds fresh state on top of `storage`. The session starts anonymous;
    /// call `session.restore_session()` to pick up a previous login.
    pub fn new(config: ConfigState, storage: Arc<dyn KeyValueStore>) -> Self {
        let session = SessionStore::new(
            storage,
            Arc::new(config.admin.verifier()),
            config.storage.clone(),
        );

        AppContext {
            cart: CartState::new(),
            catalog: CatalogState::seeded(),
            orders: OrderState::new(),
            session: SessionState::new(session),
            config: Arc::new(config),
        }
    }
}

/// Starts the application without a window.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: info,bella=debug,sqlx=warn; RUST_LOG overrides           │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → bella.toml → BELLA_* environment                       │
/// │                                                                         │
/// │  3. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite with WAL mode, run pending migrations                      │
/// │                                                                         │
/// │  4. Initialize State Objects ─────────────────────────────────────────► │
/// │     • Seeded catalog, empty cart and order board                        │
/// │                                                                         │
/// │  5. Restore Admin Session ────────────────────────────────────────────► │
/// │     • Adopts a stored identity, wipes a corrupt one                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<AppContext, Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Bella Vista");

    let config = ConfigState::load(None)?;

    let db_path = database_path(&config)?;
    info!(?db_path, "Database path determined");

    let db = Database::new(DbConfig::new(db_path)).await?;
    info!("Database connected and migrations applied");

    let context = AppContext::new(config, Arc::new(db.kv()));
    let session = context.session.restore_session().await;

    info!(
        restaurant = %context.config.restaurant_name,
        menu_items = context.catalog.read(|c| c.item_count()),
        admin_signed_in = session.is_authenticated(),
        "State initialized"
    );

    Ok(context)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bella=trace` - Show trace for bella crates only
/// - Default: `info,bella=debug,sqlx=warn`
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bella=debug,sqlx=warn"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Determines the database file path.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.bellavista.bella-vista/bella.db`
/// - **Windows**: `%APPDATA%\bellavista\bella-vista\data\bella.db`
/// - **Linux**: `~/.local/share/bella-vista/bella.db`
///
/// `database_path` in the config (or `BELLA_DB_PATH`) takes precedence.
pub fn database_path(config: &ConfigState) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(path) = &config.database_path {
        return Ok(path.clone());
    }

    let proj_dirs = ProjectDirs::from("com", "bellavista", "bella-vista")
        .ok_or("Could not determine app data directory")?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("bella.db"))
}
