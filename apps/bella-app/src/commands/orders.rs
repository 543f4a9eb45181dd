//! # Order Board Commands
//!
//! The kitchen's view of open delivery orders. Admin only.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  #a1f3  Jane Smith      $36.00    [■■□□□] Cooking       [ Advance ]    │
//! │  #9c20  Marco Rossi     $65.00    [■■■■□] Out for Del.  [ Advance ]    │
//! │                                                                         │
//! │  Advancing "Out for Delivery" marks the order Delivered and it          │
//! │  disappears from this list.                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bella_core::{Order, OrderStatus};
use serde::Serialize;
use tracing::{debug, info};
use ts_rs::TS;

use crate::commands::require_admin;
use crate::error::ApiResult;
use crate::state::{OrderState, SessionState};

/// An order after a status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub order: Order,
    /// Pipeline position for the progress bar, 0 for placed.
    pub step: usize,
    pub label: String,
    /// True once the order is delivered and off the board.
    pub removed: bool,
}

impl From<Order> for OrderUpdate {
    fn from(order: Order) -> Self {
        OrderUpdate {
            step: order.status.step(),
            label: order.status.label().to_string(),
            removed: order.status.is_terminal(),
            order,
        }
    }
}

/// Open orders, newest first.
pub fn admin_list_orders(session: &SessionState, orders: &OrderState) -> ApiResult<Vec<Order>> {
    debug!("admin_list_orders command");
    require_admin(session, "admin_list_orders")?;

    Ok(orders.with_board(|b| b.orders().to_vec()))
}

/// Moves an order one step along the pipeline.
pub fn admin_advance_order(
    session: &SessionState,
    orders: &OrderState,
    order_id: String,
) -> ApiResult<OrderUpdate> {
    debug!(order_id = %order_id, "admin_advance_order command");
    let admin = require_admin(session, "admin_advance_order")?;

    let order = orders.with_board_mut(|b| b.advance(&order_id))?;
    info!(order_id = %order.id, status = ?order.status, admin = %admin.id, "Order advanced");
    Ok(OrderUpdate::from(order))
}

/// Jumps an order to any status.
pub fn admin_set_order_status(
    session: &SessionState,
    orders: &OrderState,
    order_id: String,
    status: OrderStatus,
) -> ApiResult<OrderUpdate> {
    debug!(order_id = %order_id, ?status, "admin_set_order_status command");
    let admin = require_admin(session, "admin_set_order_status")?;

    let order = orders.with_board_mut(|b| b.set_status(&order_id, status))?;
    info!(order_id = %order.id, status = ?order.status, admin = %admin.id, "Order status set");
    Ok(OrderUpdate::from(order))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{admin_session, anonymous_session};
    use crate::error::ErrorCode;
    use bella_core::{Cart, CustomerInfo, MenuCategory, MenuItemSummary};

    fn board_with_order() -> (OrderState, String) {
        let mut cart = Cart::new();
        cart.add_item(MenuItemSummary {
            id: "main2".to_string(),
            name: "Lobster Thermidor".to_string(),
            price_cents: 5200,
            category: MenuCategory::Main,
        });
        let customer = CustomerInfo {
            name: "Marco Rossi".to_string(),
            phone: "555-123-4567".to_string(),
            address: "4 Harbour Road".to_string(),
        };

        let orders = OrderState::new();
        let id = orders
            .with_board_mut(|b| b.place(customer, &cart))
            .unwrap()
            .id;
        (orders, id)
    }

    #[tokio::test]
    async fn test_anonymous_rejected() {
        let session = anonymous_session();
        let (orders, id) = board_with_order();

        let err = admin_list_orders(&session, &orders).unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);

        let err = admin_advance_order(&session, &orders, id.clone()).unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);

        let status = orders.with_board(|b| b.get(&id).map(|o| o.status));
        assert_eq!(status, Some(OrderStatus::Placed));
    }

    #[tokio::test]
    async fn test_advance_until_delivered() {
        let session = admin_session().await;
        let (orders, id) = board_with_order();

        for expected in [OrderStatus::Cooking, OrderStatus::Ready, OrderStatus::Delivering] {
            let update = admin_advance_order(&session, &orders, id.clone()).unwrap();
            assert_eq!(update.order.status, expected);
            assert!(!update.removed);
        }

        let update = admin_advance_order(&session, &orders, id.clone()).unwrap();
        assert_eq!(update.order.status, OrderStatus::Delivered);
        assert_eq!(update.step, 4);
        assert!(update.removed);
        assert!(admin_list_orders(&session, &orders).unwrap().is_empty());

        let err = admin_advance_order(&session, &orders, id).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_set_status() {
        let session = admin_session().await;
        let (orders, id) = board_with_order();

        let update =
            admin_set_order_status(&session, &orders, id.clone(), OrderStatus::Ready).unwrap();
        assert_eq!(update.label, "Ready");
        assert_eq!(admin_list_orders(&session, &orders).unwrap().len(), 1);

        admin_set_order_status(&session, &orders, id, OrderStatus::Delivered).unwrap();
        assert!(admin_list_orders(&session, &orders).unwrap().is_empty());
    }
}
