//! # Order State
//!
//! Shared handle to the admin order board. Orders live in memory only; the
//! board is empty after a restart.

use std::sync::{Arc, Mutex, PoisonError};

use bella_core::OrderBoard;

#[derive(Debug, Clone, Default)]
pub struct OrderState {
    board: Arc<Mutex<OrderBoard>>,
}

impl OrderState {
    pub fn new() -> Self {
        OrderState::default()
    }

    pub fn with_board<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OrderBoard) -> R,
    {
        let board = self.board.lock().unwrap_or_else(PoisonError::into_inner);
        f(&board)
    }

    pub fn with_board_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrderBoard) -> R,
    {
        let mut board = self.board.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut board)
    }
}
