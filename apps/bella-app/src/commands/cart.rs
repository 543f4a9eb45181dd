//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Order   │       │
//! │  │  Cart    │     │          │     │   Form   │     │  Placed  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │       ▲                │                                  │             │
//! │       │           add_to_cart                       submit_order       │
//! │       │           update_cart_item                  (checkout.rs)      │
//! │       │           remove_from_cart                        │             │
//! │       │                │                                  │             │
//! │       └──── clear_cart ┴──────────────────────────────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only `add_to_cart` can fail, and only because the catalog has no such
//! item. Everything else is a well-defined mutation or a no-op.

use bella_core::{Cart, CartLine, CartTotals};
use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use crate::error::{ApiError, ApiResult};
use crate::state::{CartState, CatalogState};

/// Cart response including lines and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            lines: cart.lines().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart drawer                                                           │
/// │                                                                         │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  YOUR ORDER                                        3 items     │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  Truffle Arancini        x2              $36.00              │    │
/// │  │  Wagyu Beef Tenderloin   x1              $65.00              │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  TOTAL                                   $101.00             │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// │                                                                         │
/// │  get_cart() → { lines: [...], totals: {...} }                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds one unit of a menu item to the cart.
///
/// Name, price and category come from the catalog, not the caller, and are
/// frozen into the line when it is first created.
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    item_id: String,
) -> ApiResult<CartResponse> {
    debug!(item_id = %item_id, "add_to_cart command");

    let summary = catalog
        .read(|c| c.find_item(&item_id).map(|item| item.summary()))
        .ok_or_else(|| ApiError::not_found("Menu item", &item_id))?;

    Ok(cart.with_cart_mut(|c| {
        c.add_item(summary);
        CartResponse::from(&*c)
    }))
}

/// Sets the quantity of a line. Zero or less removes it; unknown ids are ignored.
pub fn update_cart_item(cart: &CartState, item_id: String, quantity: i64) -> CartResponse {
    debug!(item_id = %item_id, quantity, "update_cart_item command");

    cart.with_cart_mut(|c| {
        c.update_quantity(&item_id, quantity);
        CartResponse::from(&*c)
    })
}

/// Removes a line from the cart.
pub fn remove_from_cart(cart: &CartState, item_id: String) -> CartResponse {
    debug!(item_id = %item_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove_item(&item_id);
        CartResponse::from(&*c)
    })
}

/// Clears all items from the cart.
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(&*c)
    })
}
