//! # Cart
//!
//! The order-in-progress for the current visit: one line per menu item,
//! a quantity per line, and a total derived from the lines.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Guest Action             Cart Method            Effect                 │
//! │  ────────────             ───────────            ──────                 │
//! │                                                                         │
//! │  Click "Add" ───────────► add_item() ──────────► qty += 1 or new line  │
//! │                                                                         │
//! │  Click + / - ───────────► update_quantity() ───► qty = n (n ≤ 0: gone) │
//! │                                                                         │
//! │  Click trash ───────────► remove_item() ───────► line gone             │
//! │                                                                         │
//! │  Order confirmed ───────► clear() ─────────────► empty                 │
//! │                                                                         │
//! │  Render footer ─────────► total() ─────────────► Σ price × qty         │
//! │                                                                         │
//! │  NOTE: no method here returns an error. Unknown ids are no-ops.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per menu item id
//! - Every line has `quantity >= 1`
//! - `total()` is recomputed from the lines on every call
//!
//! The lines are private so the invariants can only be changed through the
//! methods below. The cart is memory-only: it derives `Serialize` for the
//! frontend but is never written to storage.

use serde::Serialize;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{MenuCategory, MenuItemSummary};

/// One aggregated entry in the cart, keyed by menu item id.
///
/// Name, price and category are frozen at the moment the item is first
/// added, so an admin editing the menu does not reprice an open cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub unit_price_cents: i64,
    pub category: MenuCategory,
    pub quantity: u32,
}

impl CartLine {
    fn from_summary(item: MenuItemSummary) -> Self {
        CartLine {
            id: item.id,
            name: item.name,
            // Prices are non-negative by contract; clamp anything else.
            unit_price_cents: item.price_cents.max(0),
            category: item.category,
            quantity: 1,
        }
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds one unit of a menu item.
    ///
    /// ## Behavior
    /// - Item already in cart: quantity increases by 1
    /// - Item not in cart: new line with quantity 1
    pub fn add_item(&mut self, item: impl Into<MenuItemSummary>) {
        let item = item.into();
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == item.id) {
            line.quantity = line.quantity.checked_add(1).unwrap_or(u32::MAX);
            return;
        }
        self.lines.push(CartLine::from_summary(item));
    }

    /// Sets the quantity of a line exactly.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: removes the line
    /// - id present: quantity set to exactly `quantity`
    /// - id not present: nothing happens
    pub fn update_quantity(&mut self, id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Removes the line for `id` if there is one.
    pub fn remove_item(&mut self, id: &str) {
        self.lines.retain(|l| l.id != id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Σ(unit price × quantity) over the current lines.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn get(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities, for the cart badge.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }
}

/// Cart totals summary for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: u64,
    pub total_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.len(),
            total_quantity: cart.total_quantity(),
            total_cents: cart.total().cents(),
        }
    }
}
