//! # Order Board
//!
//! Delivery orders between checkout and the customer's door.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Guest checkout                                                         │
//! │       │  place(customer, &cart)                                         │
//! │       ▼                                                                 │
//! │  ┌────────┐  advance  ┌─────────┐  advance  ┌───────┐                  │
//! │  │ Placed │ ────────► │ Cooking │ ────────► │ Ready │                  │
//! │  └────────┘           └─────────┘           └───────┘                  │
//! │                                                 │ advance               │
//! │                                                 ▼                       │
//! │                      ┌───────────┐  advance  ┌────────────┐            │
//! │   (off the board) ◄──│ Delivered │ ◄──────── │ Delivering │            │
//! │                      └───────────┘           └────────────┘            │
//! │                                                                         │
//! │  set_status() may jump to any step; Delivered still removes.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use uuid::Uuid;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::types::{CustomerInfo, Order, OrderLine, OrderStatus};
use crate::validation::validate_customer_info;

/// Open orders, newest first.
#[derive(Debug, Clone, Default)]
pub struct OrderBoard {
    orders: Vec<Order>,
}

impl OrderBoard {
    pub fn new() -> Self {
        OrderBoard::default()
    }

    /// Turns the cart into an order on the board.
    ///
    /// Lines, names and prices are copied out of the cart, so the caller is
    /// free to clear it once this returns `Ok`.
    pub fn place(&mut self, customer: CustomerInfo, cart: &Cart) -> CoreResult<Order> {
        if cart.is_empty() {
            return Err(CoreError::EmptyOrder);
        }
        validate_customer_info(&customer)?;

        let customer = CustomerInfo {
            name: customer.name.trim().to_string(),
            phone: customer.phone.trim().to_string(),
            address: customer.address.trim().to_string(),
        };

        let lines = cart
            .lines()
            .iter()
            .map(|line| OrderLine {
                item_id: line.id.clone(),
                name: line.name.clone(),
                quantity: line.quantity,
                unit_price_cents: line.unit_price_cents,
            })
            .collect();

        let order = Order {
            id: Uuid::new_v4().to_string(),
            customer,
            lines,
            total_cents: cart.total().cents(),
            status: OrderStatus::Placed,
            placed_at: Utc::now(),
        };

        self.orders.insert(0, order.clone());
        Ok(order)
    }

    /// Moves an order one step along the pipeline.
    pub fn advance(&mut self, id: &str) -> CoreResult<Order> {
        let current = self
            .get(id)
            .ok_or_else(|| CoreError::OrderNotFound(id.to_string()))?
            .status;

        // Only Delivered has no successor, and delivered orders are never on the board.
        let next = current.next().unwrap_or(OrderStatus::Delivered);
        self.set_status(id, next)
    }

    /// Sets an order's status. Delivered orders are taken off the board.
    pub fn set_status(&mut self, id: &str, status: OrderStatus) -> CoreResult<Order> {
        let index = self
            .orders
            .iter()
            .position(|o| o.id == id)
            .ok_or_else(|| CoreError::OrderNotFound(id.to_string()))?;

        if status.is_terminal() {
            let mut order = self.orders.remove(index);
            order.status = status;
            return Ok(order);
        }

        let order = &mut self.orders[index];
        order.status = status;
        Ok(order.clone())
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MenuCategory, MenuItemSummary};

    fn customer() -> CustomerInfo {
        CustomerInfo {
            name: "Jane Smith".to_string(),
            phone: "+1 (555) 987-6543".to_string(),
            address: "456 Oak Ave, Brooklyn, NY 11201".to_string(),
        }
    }

    fn cart() -> Cart {
        let mut cart = Cart::new();
        let wagyu = MenuItemSummary {
            id: "main1".to_string(),
            name: "Wagyu Beef Tenderloin".to_string(),
            price_cents: 6500,
            category: MenuCategory::Main,
        };
        cart.add_item(wagyu.clone());
        cart.add_item(wagyu);
        cart
    }

    #[test]
    fn test_place_snapshots_cart() {
        let mut board = OrderBoard::new();
        let order = board.place(customer(), &cart()).unwrap();

        assert_eq!(order.status, OrderStatus::Placed);
        assert_eq!(order.total_cents, 13000);
        assert_eq!(order.lines.len(), 1);
        assert_eq!(order.lines[0].quantity, 2);
        assert_eq!(order.lines[0].line_total().cents(), 13000);
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_place_rejects_empty_cart() {
        let mut board = OrderBoard::new();
        let result = board.place(customer(), &Cart::new());
        assert!(matches!(result, Err(CoreError::EmptyOrder)));
        assert!(board.is_empty());
    }

    #[test]
    fn test_place_rejects_bad_customer() {
        let mut board = OrderBoard::new();
        let mut info = customer();
        info.phone = "nope".to_string();

        let result = board.place(info, &cart());
        assert!(matches!(result, Err(CoreError::Validation(_))));
        assert!(board.is_empty());
    }

    #[test]
    fn test_newest_first() {
        let mut board = OrderBoard::new();
        let first = board.place(customer(), &cart()).unwrap();
        let second = board.place(customer(), &cart()).unwrap();

        let ids: Vec<&str> = board.orders().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, [second.id.as_str(), first.id.as_str()]);
    }

    #[test]
    fn test_advance_through_pipeline() {
        let mut board = OrderBoard::new();
        let id = board.place(customer(), &cart()).unwrap().id;

        assert_eq!(board.advance(&id).unwrap().status, OrderStatus::Cooking);
        assert_eq!(board.advance(&id).unwrap().status, OrderStatus::Ready);
        assert_eq!(board.advance(&id).unwrap().status, OrderStatus::Delivering);
        assert_eq!(board.get(&id).unwrap().status, OrderStatus::Delivering);

        let delivered = board.advance(&id).unwrap();
        assert_eq!(delivered.status, OrderStatus::Delivered);
        assert!(board.get(&id).is_none());

        assert!(matches!(board.advance(&id), Err(CoreError::OrderNotFound(_))));
    }

    #[test]
    fn test_set_status() {
        let mut board = OrderBoard::new();
        let id = board.place(customer(), &cart()).unwrap().id;

        board.set_status(&id, OrderStatus::Ready).unwrap();
        assert_eq!(board.get(&id).unwrap().status, OrderStatus::Ready);

        board.set_status(&id, OrderStatus::Cooking).unwrap();
        assert_eq!(board.get(&id).unwrap().status, OrderStatus::Cooking);

        board.set_status(&id, OrderStatus::Delivered).unwrap();
        assert!(board.is_empty());
    }
}
