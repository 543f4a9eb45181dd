//! # Cart State
//!
//! Shared handle to the guest's cart.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Several commands read and modify the cart
//! 2. Only one command may modify it at a time
//! 3. Commands can run concurrently on the runtime
//!
//! A poisoned lock is recovered rather than propagated: every cart method
//! leaves the cart consistent, so a panic elsewhere cannot corrupt it.
//!
//! The cart itself (`bella_core::Cart`) is never persisted. A restart
//! starts with an empty cart.

use std::sync::{Arc, Mutex, PoisonError};

use bella_core::Cart;

#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState::default()
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|c| CartTotals::from(c));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }
}
