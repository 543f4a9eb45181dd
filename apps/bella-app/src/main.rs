//! # Bella Vista Entry Point
//!
//! Headless host for the application layer.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bella Vista                                      │
//! │                                                                         │
//! │  main.rs ────► runs bella_app::run() on a Tokio runtime                 │
//! │                                                                         │
//! │  lib.rs ─────► logging, config, database, state, session restore       │
//! │                                                                         │
//! │  commands/ ──► add_to_cart, submit_order, login, admin_* ...            │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                         SQLite Database                          │  │
//! │  │  bella.db (kv_store: admin-token, admin-user)                    │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match bella_app::run().await {
        Ok(context) => {
            tracing::info!(session = ?context.session.snapshot(), "Bella Vista ready");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            eprintln!("bella-app: {}", e);
            ExitCode::FAILURE
        }
    }
}
