use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::CartError;
use super::outcome::CartOutcome;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;

/// One product's aggregated quantity within the cart.
///
/// `price` and `stock` are snapshots: the price when the line was first
/// added, and the product stock when the line was last touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
    pub image_url: String,
    pub stock: u32,
}

impl CartLine {
    fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            quantity,
            image_url: product.image_url.clone(),
            stock: product.stock,
        }
    }

    /// Saturates at `Decimal::MAX` instead of overflowing.
    pub fn subtotal(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }

    fn checked_subtotal(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }

    fn is_valid(&self) -> bool {
        !self.price.is_sign_negative() && self.quantity >= 1 && self.quantity <= self.stock
    }
}

/// Immutable view of the cart published to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub total: Decimal,
    pub count: u64,
}

/// The ordered collection of cart lines.
///
/// Every transition keeps `1 <= quantity <= stock` for each line and at most
/// one line per product. Transitions are pure: they only touch the lines and
/// describe what happened, side effects belong to the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from previously stored lines, rejecting any collection
    /// that breaks the line invariants or whose total is not representable.
    pub fn from_lines(lines: Vec<CartLine>) -> Result<Self, CartError> {
        let mut seen = HashSet::with_capacity(lines.len());
        let mut total = Decimal::ZERO;
        for line in &lines {
            if !line.is_valid() {
                return Err(CartError::InvalidLine(line.product_id.clone()));
            }
            if !seen.insert(&line.product_id) {
                return Err(CartError::DuplicateLine(line.product_id.clone()));
            }
            total = line
                .checked_subtotal()
                .and_then(|subtotal| total.checked_add(subtotal))
                .ok_or_else(|| CartError::InvalidLine(line.product_id.clone()))?;
        }
        Ok(Self { lines })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CartError> {
        let lines: Vec<CartLine> = serde_json::from_slice(bytes)?;
        Self::from_lines(lines)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CartError> {
        Ok(serde_json::to_vec(&self.lines)?)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.product_id == product_id)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Saturates at `Decimal::MAX` rather than overflowing.
    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .map(CartLine::subtotal)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    pub fn count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines.clone(),
            total: self.total(),
            count: self.count(),
        }
    }

    /// Adds up to `requested` units of `product`, bounded by its stock.
    ///
    /// Returns `None` for a non-positive request.
    pub fn add(&mut self, product: &Product, requested: i64) -> Option<CartOutcome> {
        if requested <= 0 {
            return None;
        }

        let name = product.name.clone();
        if product.is_out_of_stock() {
            return Some(CartOutcome::OutOfStock { name });
        }

        let existing_qty = self.line(&product.id).map_or(0, |line| line.quantity);
        let room = i64::from(product.stock) - i64::from(existing_qty);
        if room <= 0 {
            return Some(CartOutcome::InsufficientRoom { name, available: 0 });
        }

        // room <= stock, so the bounded amount always fits in u32
        let addable = u32::try_from(requested.min(room)).unwrap_or(product.stock);
        let capped = i64::from(addable) < requested;

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            line.quantity = line.quantity.saturating_add(addable).min(product.stock);
            line.stock = product.stock;
            if capped {
                return Some(CartOutcome::CappedToStock {
                    name,
                    max: product.stock,
                });
            }
            return Some(CartOutcome::QuantityIncreased {
                name,
                quantity: line.quantity,
            });
        }

        self.lines.push(CartLine::from_product(product, addable));
        if capped {
            Some(CartOutcome::CappedToStock {
                name,
                max: product.stock,
            })
        } else {
            Some(CartOutcome::Added { name })
        }
    }

    /// Sets the quantity of an existing line.
    ///
    /// Non-positive quantities are rejected and leave the line untouched.
    /// Returns `None` when no line exists for `product_id`.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Option<CartOutcome> {
        let line = self
            .lines
            .iter_mut()
            .find(|line| &line.product_id == product_id)?;

        let outcome = if quantity <= 0 {
            CartOutcome::InvalidQuantity {
                name: line.name.clone(),
            }
        } else if quantity > i64::from(line.stock) {
            line.quantity = line.stock;
            CartOutcome::CappedToStock {
                name: line.name.clone(),
                max: line.stock,
            }
        } else {
            line.quantity = u32::try_from(quantity).unwrap_or(line.stock);
            CartOutcome::Updated {
                name: line.name.clone(),
                quantity: line.quantity,
            }
        };

        self.lines.retain(|line| line.quantity > 0);
        Some(outcome)
    }

    /// Returns `None` when no line exists for `product_id`.
    pub fn remove(&mut self, product_id: &ProductId) -> Option<CartOutcome> {
        let position = self
            .lines
            .iter()
            .position(|line| &line.product_id == product_id)?;
        let removed = self.lines.remove(position);
        Some(CartOutcome::Removed { name: removed.name })
    }

    pub fn clear(&mut self) -> CartOutcome {
        self.lines.clear();
        CartOutcome::Cleared
    }
}
