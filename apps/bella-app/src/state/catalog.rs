//! # Catalog State
//!
//! Shared handle to the menu and event list.
//!
//! Guests read far more often than admins write, so this is an `RwLock`
//! rather than the cart's `Mutex`.

use std::sync::{Arc, PoisonError, RwLock};

use bella_core::Catalog;

#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    catalog: Arc<RwLock<Catalog>>,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    /// The restaurant's opening menu and events.
    pub fn seeded() -> Self {
        CatalogState::new(Catalog::seed())
    }

    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Catalog) -> R,
    {
        let catalog = self.catalog.read().unwrap_or_else(PoisonError::into_inner);
        f(&catalog)
    }

    pub fn write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Catalog) -> R,
    {
        let mut catalog = self.catalog.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut catalog)
    }
}
