//! # Commands Module
//!
//! One function per user intent. The presentation layer calls these and
//! gets back serializable responses or an [`ApiError`](crate::error::ApiError).
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (admin gate)
//! ├── cart.rs     ◄─── Cart manipulation
//! ├── checkout.rs ◄─── Order submission
//! ├── contact.rs  ◄─── Contact form
//! ├── menu.rs     ◄─── Menu browsing + admin menu editing
//! ├── events.rs   ◄─── Event listing + admin event editing
//! ├── orders.rs   ◄─── Admin order board
//! ├── session.rs  ◄─── Login / logout
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartState) -> CartResponse
//!
//! // Needs catalog and cart
//! fn add_to_cart(catalog: &CatalogState, cart: &CartState, item_id: String)
//!
//! // Admin: session first, always
//! fn admin_advance_order(session: &SessionState, orders: &OrderState, order_id: String)
//! ```

pub mod cart;
pub mod checkout;
pub mod config;
pub mod contact;
pub mod events;
pub mod menu;
pub mod orders;
pub mod session;

use bella_core::AdminUser;
use tracing::warn;

use crate::error::{ApiError, ApiResult};
use crate::state::SessionState;

/// Returns the acting admin, or `UNAUTHORIZED` for an anonymous session.
pub(crate) fn require_admin(session: &SessionState, command: &str) -> ApiResult<AdminUser> {
    session.current_user().ok_or_else(|| {
        warn!(command, "Admin command rejected: not logged in");
        ApiError::unauthorized()
    })
}
