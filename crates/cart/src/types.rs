//! Cart domain types.
//!
//! The serialized form of [`Cart`] doubles as the persisted snapshot format:
//! a JSON array of flat line objects (product fields plus `quantity`). The
//! in-memory collection held by the store is always exactly the deserialized
//! mirror of the most recently written snapshot.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use treadline_core::{Money, ProductId};

/// A product as presented by the inventory service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Inventory identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price.
    pub price: Money,
    /// Primary image URL.
    pub image: String,
}

/// Available stock for a single product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    /// Product this level refers to.
    pub product_id: ProductId,
    /// Units currently available for purchase.
    pub quantity_available: u32,
}

/// A product in the cart together with its requested quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product being purchased. Flattened so the snapshot stays a flat
    /// array of line objects.
    #[serde(flatten)]
    pub product: Product,
    /// Requested quantity. Never zero or negative while the line is present.
    pub quantity: u32,
}

impl CartLine {
    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        Money::new(
            self.product.price.amount * Decimal::from(self.quantity),
            self.product.price.currency_code,
        )
    }
}

/// Ordered collection of cart lines.
///
/// Lines are unique by product id and keep first-added order. Mutation goes
/// through the store so the persisted mirror can never drift; this type only
/// exposes read access.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn empty() -> Self {
        Self { lines: Vec::new() }
    }

    /// All lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Look up the line for a product, if present.
    #[must_use]
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product.id == product_id)
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of all line totals. `None` for an empty cart.
    ///
    /// Assumes a single-currency cart; the currency is taken from the first
    /// line.
    #[must_use]
    pub fn subtotal(&self) -> Option<Money> {
        let first = self.lines.first()?;
        let amount = self.lines.iter().map(|line| line.line_total().amount).sum();
        Some(Money::new(amount, first.product.price.currency_code))
    }

    /// Set the quantity of an existing line in place.
    ///
    /// Returns `false` (leaving the cart untouched) if no line has this
    /// product id.
    pub(crate) fn set_quantity(&mut self, product_id: ProductId, quantity: u32) -> bool {
        match self.lines.iter_mut().find(|line| line.product.id == product_id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Append a new line. Callers must have checked the id is absent.
    pub(crate) fn push_line(&mut self, line: CartLine) {
        debug_assert!(
            self.line(line.product.id).is_none(),
            "duplicate cart line for product {}",
            line.product.id
        );
        self.lines.push(line);
    }

    /// Remove the line for a product. Returns `false` if it was absent.
    pub(crate) fn remove_line(&mut self, product_id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.product.id != product_id);
        self.lines.len() != before
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::testkit::domain::product;

    use super::*;

    fn sample_cart() -> Cart {
        let mut cart = Cart::empty();
        cart.push_line(CartLine {
            product: product(1, "Cloudrunner 2", 14990),
            quantity: 2,
        });
        cart.push_line(CartLine {
            product: product(2, "Court Classic", 8900),
            quantity: 1,
        });
        cart
    }

    #[test]
    fn test_line_lookup() {
        let cart = sample_cart();
        assert_eq!(cart.line(ProductId::new(1)).unwrap().quantity, 2);
        assert!(cart.line(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_set_quantity_in_place_keeps_order() {
        let mut cart = sample_cart();
        assert!(cart.set_quantity(ProductId::new(1), 4));
        assert!(!cart.set_quantity(ProductId::new(99), 4));

        let ids: Vec<i64> = cart
            .lines()
            .iter()
            .map(|line| line.product.id.as_i64())
            .collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(cart.line(ProductId::new(1)).unwrap().quantity, 4);
    }

    #[test]
    fn test_remove_line() {
        let mut cart = sample_cart();
        assert!(cart.remove_line(ProductId::new(1)));
        assert!(!cart.remove_line(ProductId::new(1)));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines().first().unwrap().product.id, ProductId::new(2));
    }

    #[test]
    fn test_totals() {
        let cart = sample_cart();
        assert_eq!(cart.total_quantity(), 3);
        // 2 x $149.90 + 1 x $89.00
        assert_eq!(cart.subtotal().unwrap().to_string(), "$388.80");
        assert!(Cart::empty().subtotal().is_none());
    }

    #[test]
    fn test_snapshot_shape_is_flat_line_array() {
        let mut cart = Cart::empty();
        cart.push_line(CartLine {
            product: product(1, "Cloudrunner 2", 14990),
            quantity: 2,
        });

        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(
            json,
            r#"[{"id":1,"title":"Cloudrunner 2","price":{"amount":"149.90","currency_code":"USD"},"image":"https://cdn.treadline.test/products/1.jpg","quantity":2}]"#
        );

        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn test_empty_snapshot_round_trip() {
        let json = serde_json::to_string(&Cart::empty()).unwrap();
        assert_eq!(json, "[]");
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert!(back.is_empty());
    }
}
