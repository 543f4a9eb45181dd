//! # Checkout Command
//!
//! Turns the guest's cart into a delivery order.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    submit_order(customer)                               │
//! │                                                                         │
//! │   lock cart ──► lock board ──► OrderBoard::place(customer, &cart)       │
//! │                                      │                                  │
//! │                     ┌────────────────┴────────────────┐                 │
//! │                     ▼                                 ▼                 │
//! │                  Ok(order)                         Err(e)               │
//! │                     │                                 │                 │
//! │              cart.clear()                     cart untouched            │
//! │              confirmation                     EMPTY_ORDER /             │
//! │                                               VALIDATION_ERROR          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Locks are always taken cart first, then board.

use bella_core::{CustomerInfo, Order};
use serde::Serialize;
use tracing::{debug, info};
use ts_rs::TS;

use crate::error::ApiResult;
use crate::state::{CartState, ConfigState, OrderState};

/// What the guest sees after a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order: Order,
    /// e.g. "Thank you, Jane! Your order of $36.00 is being prepared by Bella Vista."
    pub message: String,
}

/// Places an order for everything in the cart and empties the cart.
///
/// The cart is cleared only when the order was accepted. A rejected
/// submission (empty cart, bad delivery details) leaves it as it was.
pub fn submit_order(
    cart: &CartState,
    orders: &OrderState,
    config: &ConfigState,
    customer: CustomerInfo,
) -> ApiResult<OrderConfirmation> {
    debug!("submit_order command");

    let order = cart.with_cart_mut(|c| {
        let order = orders.with_board_mut(|board| board.place(customer, c))?;
        c.clear();
        Ok::<_, bella_core::CoreError>(order)
    })?;

    info!(
        order_id = %order.id,
        lines = order.lines.len(),
        total_cents = order.total_cents,
        "Order placed"
    );

    let message = format!(
        "Thank you, {}! Your order of {} is being prepared by {}.",
        order.customer.name,
        config.format_currency(order.total_cents),
        config.restaurant_name
    );

    Ok(OrderConfirmation { order, message })
}
