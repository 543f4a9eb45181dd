//! # State Module
//!
//! Shared application state, one type per concern.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │  CartState   │ │ CatalogState │ │  OrderState  │ │ SessionState │   │
//! │  │              │ │              │ │              │ │              │   │
//! │  │  Arc<Mutex<  │ │  Arc<RwLock< │ │  Arc<Mutex<  │ │ Arc<Session  │   │
//! │  │    Cart>>    │ │   Catalog>>  │ │  OrderBoard>>│ │    Store>    │   │
//! │  │  memory only │ │  memory only │ │  memory only │ │  durable     │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────┬───────┘   │
//! │                                                             │           │
//! │  ┌──────────────┐                                           ▼           │
//! │  │ ConfigState  │                              Arc<dyn KeyValueStore>  │
//! │  │  read-only   │                                                       │
//! │  └──────────────┘                                                       │
//! │                                                                         │
//! │  Each command takes only the states it needs.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;
mod orders;
mod session;

pub use cart::CartState;
pub use catalog::CatalogState;
pub use config::{AdminAccount, ConfigError, ConfigState};
pub use orders::OrderState;
pub use session::{
    LoginOutcome, Session, SessionError, SessionSnapshot, SessionState, SessionStore,
    StorageKeys, INVALID_CREDENTIALS,
};
