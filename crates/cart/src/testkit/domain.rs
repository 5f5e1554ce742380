//! Builders for domain primitives used across tests.

use treadline_core::{CurrencyCode, Money, ProductId};

use crate::types::Product;

/// Build a product with plausible display fields.
#[must_use]
pub fn product(id: i64, title: &str, price_minor: i64) -> Product {
    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        price: Money::from_minor_units(price_minor, CurrencyCode::USD),
        image: format!("https://cdn.treadline.test/products/{id}.jpg"),
    }
}
