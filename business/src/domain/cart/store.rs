use std::sync::Arc;

use rust_decimal::Decimal;

use super::model::{Cart, CartLine, CartSnapshot};
use super::outcome::CartOutcome;
use super::subscription::{Subscribers, SubscriptionId};
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;
use crate::domain::storage::KeyValueStorage;

pub const DEFAULT_STORAGE_KEY: &str = "cartItems";

/// Owns the shopper's cart and mirrors it into a storage slot.
///
/// Each operation runs a pure transition on a working copy of the cart. Once
/// the transition is committed the store persists the new state, publishes a
/// snapshot to subscribers and finally relays the outcome to the notifier.
/// Storage failures are logged and never undo the in-memory change.
pub struct CartStore {
    cart: Cart,
    storage_key: String,
    storage: Arc<dyn KeyValueStorage>,
    notifier: Arc<dyn Notifier>,
    logger: Arc<dyn Logger>,
    subscribers: Subscribers,
}

impl CartStore {
    /// Restores the cart persisted under `storage_key`.
    ///
    /// A missing, unreadable or malformed payload yields an empty cart. A
    /// malformed payload is also removed from storage.
    pub fn hydrate(
        storage_key: impl Into<String>,
        storage: Arc<dyn KeyValueStorage>,
        notifier: Arc<dyn Notifier>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let storage_key = storage_key.into();

        let cart = match storage.read(&storage_key) {
            Ok(None) => {
                logger.debug(&format!("No cart stored under '{}'", storage_key));
                Cart::new()
            }
            Ok(Some(bytes)) => match Cart::from_bytes(&bytes) {
                Ok(cart) => {
                    logger.info(&format!("Restored cart with {} lines", cart.len()));
                    cart
                }
                Err(e) => {
                    logger.warn(&format!("Discarding stored cart: {}", e));
                    if let Err(e) = storage.remove(&storage_key) {
                        logger.warn(&format!("Failed to remove stored cart: {}", e));
                    }
                    Cart::new()
                }
            },
            Err(e) => {
                logger.error(&format!("Failed to read stored cart: {}", e));
                Cart::new()
            }
        };

        Self {
            cart,
            storage_key,
            storage,
            notifier,
            logger,
            subscribers: Subscribers::default(),
        }
    }

    pub fn add_item(&mut self, product: &Product, quantity: i64) -> Option<CartOutcome> {
        self.logger.debug(&format!(
            "Adding {} x {} to cart",
            quantity, product.id
        ));
        self.apply(|cart| cart.add(product, quantity))
    }

    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Option<CartOutcome> {
        self.logger.debug(&format!(
            "Updating {} to quantity {}",
            product_id, quantity
        ));
        self.apply(|cart| cart.update_quantity(product_id, quantity))
    }

    pub fn remove_item(&mut self, product_id: &ProductId) -> Option<CartOutcome> {
        self.logger
            .debug(&format!("Removing {} from cart", product_id));
        self.apply(|cart| cart.remove(product_id))
    }

    pub fn clear(&mut self) -> CartOutcome {
        self.logger.debug("Clearing cart");
        self.apply(|cart| Some(cart.clear()))
            .unwrap_or(CartOutcome::Cleared)
    }

    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.cart.line(product_id)
    }

    pub fn total(&self) -> Decimal {
        self.cart.total()
    }

    pub fn count(&self) -> u64 {
        self.cart.count()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn snapshot(&self) -> CartSnapshot {
        self.cart.snapshot()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&CartSnapshot) + Send + 'static,
    {
        self.subscribers.subscribe(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    fn apply<F>(&mut self, transition: F) -> Option<CartOutcome>
    where
        F: FnOnce(&mut Cart) -> Option<CartOutcome>,
    {
        let mut next = self.cart.clone();
        let outcome = transition(&mut next);

        if next != self.cart {
            self.cart = next;
            self.persist();
            self.subscribers.publish(&self.cart.snapshot());
        }

        if let Some(outcome) = &outcome {
            let notification = outcome.notification();
            if outcome.is_rejection() {
                self.logger.info(&format!(
                    "Cart request not fully applied: {}",
                    notification.description
                ));
            }
            self.notifier.notify(&notification);
        }
        outcome
    }

    fn persist(&self) {
        let bytes = match self.cart.to_bytes() {
            Ok(bytes) => bytes,
            Err(e) => {
                self.logger
                    .error(&format!("Failed to serialize cart: {}", e));
                return;
            }
        };

        if let Err(e) = self.storage.write(&self.storage_key, &bytes) {
            self.logger
                .warn(&format!("Failed to persist cart: {}", e));
        }
    }
}
