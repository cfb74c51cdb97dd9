//! Product catalog.
//!
//! Five products seeded once per process and shared read-only; there are no
//! write operations.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const NAME_MAX_LEN: usize = 150;
pub const DESCRIPTION_MAX_LEN: usize = 500;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Currency amount, two fractional digits.
    #[serde(rename = "precio", with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: i32,
}

impl Product {
    fn seed(id: i32, name: &str, description: &str, price_cents: i64, stock: i32) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            price: Decimal::new(price_cents, 2),
            stock,
        }
    }
}

static CATALOG: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product::seed(1, "Laptop", "Laptop de alto rendimiento", 120_000, 10),
        Product::seed(2, "Mouse", "Mouse inalámbrico", 2_550, 50),
        Product::seed(3, "Teclado", "Teclado mecánico", 8_500, 30),
        Product::seed(4, "Monitor", "Monitor 4K", 45_000, 15),
        Product::seed(5, "Auriculares", "Auriculares con cancelación de ruido", 20_000, 25),
    ]
});

/// The seeded catalog in fixed order.
pub fn catalog() -> &'static [Product] {
    CATALOG.as_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_five_products_in_id_order() {
        let ids: Vec<i32> = catalog().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn catalog_is_the_same_allocation_every_time() {
        assert!(std::ptr::eq(catalog(), catalog()));
    }

    #[test]
    fn seeds_respect_column_limits() {
        for p in catalog() {
            assert!(p.name.chars().count() <= NAME_MAX_LEN);
            assert!(p.description.chars().count() <= DESCRIPTION_MAX_LEN);
            assert_eq!(p.price.scale(), 2);
            assert!(p.stock >= 0);
        }
    }

    #[test]
    fn serializes_price_as_number() {
        let teclado = &catalog()[2];
        let v = serde_json::to_value(teclado).unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "id": 3,
                "nombre": "Teclado",
                "descripcion": "Teclado mecánico",
                "precio": 85.0,
                "stock": 30
            })
        );
    }
}
