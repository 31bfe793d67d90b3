use chrono::{Duration, NaiveDate};

use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductId;

/// Starter inventory written on first boot, one product per freshness tier
/// relative to `today`.
pub fn seed_products(today: NaiveDate) -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new(1),
            name: "UHT Milk 1L".to_string(),
            category: "Dairy".to_string(),
            qty: 150,
            unit_price: 1.20,
            origin: "France".to_string(),
            supplier: "Lactalis".to_string(),
            entry_date: today - Duration::days(5),
            expiry_date: today + Duration::days(30),
        },
        Product {
            id: ProductId::new(2),
            name: "Country Bread".to_string(),
            category: "Bakery".to_string(),
            qty: 45,
            unit_price: 2.50,
            origin: "Ivory Coast".to_string(),
            supplier: "Local Bakery".to_string(),
            entry_date: today - Duration::days(1),
            expiry_date: today + Duration::days(3),
        },
        Product {
            id: ProductId::new(3),
            name: "Fresh Tomatoes".to_string(),
            category: "Fruit & Vegetables".to_string(),
            qty: 80,
            unit_price: 0.80,
            origin: "Senegal".to_string(),
            supplier: "Southern Growers".to_string(),
            entry_date: today - Duration::days(10),
            expiry_date: today - Duration::days(1),
        },
    ]
}
