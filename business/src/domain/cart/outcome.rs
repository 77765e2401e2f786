use crate::domain::notifier::Notification;

/// Result of a cart operation, relayed to the shopper once the state
/// transition has been committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartOutcome {
    /// A new line was inserted with the full requested quantity.
    Added { name: String },
    /// An existing line grew by the full requested quantity.
    QuantityIncreased { name: String, quantity: u32 },
    /// The requested quantity was reduced to the available stock. The
    /// reduced change is still applied.
    CappedToStock { name: String, max: u32 },
    /// The product has no stock at all.
    OutOfStock { name: String },
    /// The cart already holds all available stock of the product.
    InsufficientRoom { name: String, available: u32 },
    /// A non-positive quantity was supplied to an update.
    InvalidQuantity { name: String },
    Updated { name: String, quantity: u32 },
    Removed { name: String },
    Cleared,
}

impl CartOutcome {
    /// Whether the outcome reflects a request that could not be satisfied in
    /// full.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            CartOutcome::CappedToStock { .. }
                | CartOutcome::OutOfStock { .. }
                | CartOutcome::InsufficientRoom { .. }
                | CartOutcome::InvalidQuantity { .. }
        )
    }

    pub fn notification(&self) -> Notification {
        match self {
            CartOutcome::Added { name } => {
                Notification::info("Item added", format!("{} added to cart.", name))
            }
            CartOutcome::QuantityIncreased { name, .. } => {
                Notification::info("Item updated", format!("{} quantity increased.", name))
            }
            CartOutcome::CappedToStock { name, max } => Notification::destructive(
                "Not enough stock",
                format!("Max {} available for {}.", max, name),
            ),
            CartOutcome::OutOfStock { name } => Notification::destructive(
                "Out of stock",
                format!("{} is currently out of stock.", name),
            ),
            CartOutcome::InsufficientRoom { available, .. } => Notification::destructive(
                "Not enough stock",
                format!("Only {} more available.", available),
            ),
            CartOutcome::InvalidQuantity { .. } => {
                Notification::destructive("Invalid quantity", "Quantity must be at least 1.")
            }
            CartOutcome::Updated { name, quantity } => Notification::info(
                "Cart updated",
                format!("{} quantity set to {}.", name, quantity),
            ),
            CartOutcome::Removed { .. } => {
                Notification::info("Item removed", "Item removed from cart.")
            }
            CartOutcome::Cleared => {
                Notification::info("Cart cleared", "All items removed from cart.")
            }
        }
    }
}
