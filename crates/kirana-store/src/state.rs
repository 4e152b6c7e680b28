//! # Shared Store Handle
//!
//! Host applications (a desktop shell, an HTTP layer) run handlers
//! concurrently, so the [`Store`] they share is wrapped in
//! `Arc<Mutex<T>>`:
//!
//! - `Arc`: shared ownership across handler threads
//! - `Mutex`: one mutator at a time, which is exactly the store's
//!   contract (every mutation is a short, synchronous function)
//!
//! ## Why Not RwLock?
//! Store operations are quick and most of them write (even a sale
//! touches stock, notifications and loyalty). A RwLock would add
//! complexity with minimal benefit.

use std::sync::{Arc, Mutex};

use crate::store::Store;

/// Thread-safe handle to one shop's [`Store`].
#[derive(Debug, Clone)]
pub struct StoreState {
    store: Arc<Mutex<Store>>,
}

impl StoreState {
    /// Wraps a store for shared access.
    pub fn new(store: Store) -> Self {
        StoreState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = state.with_store(|store| store.products().len());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        let store = self.store.lock().expect("Store mutex poisoned");
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_store_mut(|store| store.update_stock("prod-1", "loc-1", -2));
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Store) -> R,
    {
        let mut store = self.store.lock().expect("Store mutex poisoned");
        f(&mut store)
    }
}
