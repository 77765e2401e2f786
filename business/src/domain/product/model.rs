use rust_decimal::Decimal;

use crate::domain::shared::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

/// A catalog product. Read-only to the cart: `stock` is the ceiling for any
/// quantity the shopper may hold.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: u32,
    pub category: Category,
    pub image_url: String,
}

impl Product {
    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    /// Price bounds are inclusive.
    pub fn matches(&self, filter: &ProductFilter) -> bool {
        filter
            .category_id
            .as_ref()
            .is_none_or(|id| &self.category.id == id)
            && filter.price_min.is_none_or(|min| self.price >= min)
            && filter.price_max.is_none_or(|max| self.price <= max)
            && !(filter.in_stock_only && self.is_out_of_stock())
    }
}

/// Catalog browsing criteria. The default filter matches every product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub category_id: Option<String>,
    pub price_min: Option<Decimal>,
    pub price_max: Option<Decimal>,
    pub in_stock_only: bool,
}

impl ProductFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
