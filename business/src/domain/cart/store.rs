use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::ProductId;

use super::errors::CartError;
use super::model::{CartAction, CartState};
use super::repository::CartStorage;

/// Injectable cart state container.
///
/// Holds the in-memory [`CartState`], dispatches actions through the pure
/// transition function, and write-through persists the item list after every
/// successful mutation. Persistence is a side effect, not a transactional
/// boundary: a failed write keeps the in-memory state and logs a warning.
///
/// Each instance is independent; embedding code wires one per session.
pub struct CartStore {
    state: Mutex<CartState>,
    checkout_in_flight: AtomicBool,
    storage: Arc<dyn CartStorage>,
    logger: Arc<dyn Logger>,
}

impl CartStore {
    /// Creates the store for a session, reading any persisted cart once.
    ///
    /// Missing data starts an empty cart. Unreadable or corrupt data is
    /// discarded with a warning and also starts empty.
    pub async fn hydrate(storage: Arc<dyn CartStorage>, logger: Arc<dyn Logger>) -> Self {
        let items = match storage.load().await {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(err) => {
                logger.warn(&format!("Discarding persisted cart: {}", err));
                Vec::new()
            }
        };

        Self {
            state: Mutex::new(CartState::from_items(items)),
            checkout_in_flight: AtomicBool::new(false),
            storage,
            logger,
        }
    }

    /// Applies one cart action and persists the result.
    ///
    /// Rejected while a checkout is in flight, so the checkout snapshot
    /// cannot diverge from the persisted cart before it clears.
    pub async fn dispatch(&self, action: CartAction) -> Result<CartState, CartError> {
        if self.checkout_in_flight.load(Ordering::Acquire) {
            return Err(CartError::CheckoutInProgress);
        }

        let next = {
            let mut state = self.lock_state();
            let next = state.apply(action)?;
            *state = next.clone();
            next
        };

        if let Err(err) = self.storage.save(&next.items).await {
            self.logger.warn(&format!("Cart persistence failed: {}", err));
        }

        Ok(next)
    }

    /// Current cart snapshot.
    pub fn state(&self) -> CartState {
        self.lock_state().clone()
    }

    /// Quantity of the given product in the cart, 0 if absent.
    pub fn item_quantity(&self, product_id: &ProductId) -> u32 {
        self.lock_state().item_quantity(product_id)
    }

    /// Starts a checkout attempt: snapshots the cart atomically and blocks
    /// further mutation until the returned guard is completed or dropped.
    ///
    /// Dropping the guard (a failed or abandoned checkout) releases the
    /// cart unchanged; [`CheckoutGuard::complete`] clears it.
    pub fn begin_checkout(&self) -> Result<CheckoutGuard<'_>, CartError> {
        if self.checkout_in_flight.swap(true, Ordering::AcqRel) {
            return Err(CartError::CheckoutInProgress);
        }

        let snapshot = self.lock_state().clone();
        Ok(CheckoutGuard {
            store: self,
            snapshot,
        })
    }

    fn lock_state(&self) -> MutexGuard<'_, CartState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.lock_state())
            .field(
                "checkout_in_flight",
                &self.checkout_in_flight.load(Ordering::Relaxed),
            )
            .finish_non_exhaustive()
    }
}

/// In-flight checkout handle.
///
/// Carries the cart snapshot the checkout protocol works from. While it is
/// alive the store rejects mutations; the busy flag is always released on
/// drop, so an abandoned checkout can never wedge the cart.
#[derive(Debug)]
pub struct CheckoutGuard<'a> {
    store: &'a CartStore,
    snapshot: CartState,
}

impl CheckoutGuard<'_> {
    pub fn snapshot(&self) -> &CartState {
        &self.snapshot
    }

    /// Finishes a successful checkout: clears the cart and persists the
    /// empty state before releasing the store for new mutations.
    pub async fn complete(self) {
        {
            let mut state = self.store.lock_state();
            *state = CartState::default();
        }
        if let Err(err) = self.store.storage.clear().await {
            self.store
                .logger
                .warn(&format!("Clearing persisted cart failed: {}", err));
        }
    }
}

impl Drop for CheckoutGuard<'_> {
    fn drop(&mut self) {
        self.store
            .checkout_in_flight
            .store(false, Ordering::Release);
    }
}
