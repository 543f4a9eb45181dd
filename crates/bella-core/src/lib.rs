//! # bella-core: Pure Domain Logic for Bella Vista
//!
//! Everything the restaurant site knows about menus, carts, orders and
//! events, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Bella Vista Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation layer                           │   │
//! │  │     Menu ──► Cart drawer ──► Checkout ──► Admin dashboard      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    bella-app commands                           │   │
//! │  │    add_to_cart, submit_order, login, admin_advance_order, ...  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bella-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │  types  │ │  money  │ │  cart   │ │ catalog │ │ orders  │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  bella-db (key-value storage) sits beside this crate, not below it:    │
//! │  only the admin session is durable.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (MenuItem, Event, Order, AdminUser, Credential)
//! - [`money`] - Integer-cents money
//! - [`cart`] - The guest's cart
//! - [`catalog`] - Menu items and events, with admin editing
//! - [`orders`] - The admin order board
//! - [`error`] - Domain error types
//! - [`validation`] - Form field rules
//!
//! ## Example Usage
//!
//! ```rust
//! use bella_core::{Cart, Catalog, CategoryFilter, MenuCategory};
//!
//! let catalog = Catalog::seed();
//! let mut cart = Cart::new();
//!
//! for item in catalog.items(CategoryFilter::Only(MenuCategory::Appetizer)) {
//!     cart.add_item(item);
//! }
//!
//! // $18 + $24 + $16
//! assert_eq!(cart.total().to_string(), "$58.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod orders;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, CartTotals};
pub use catalog::{Catalog, CategoryFilter, EventDraft, MenuItemDraft};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use orders::OrderBoard;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Photo used for menu items added without an image.
pub const DEFAULT_ITEM_IMAGE: &str =
    "https://images.pexels.com/photos/1640777/pexels-photo-1640777.jpeg";
