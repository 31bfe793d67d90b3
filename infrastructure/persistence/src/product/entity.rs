use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;
use business::domain::product::value_objects::{DEFAULT_SUPPLIER, ProductId};

/// On-disk shape of a product inside the inventory document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub qty: u64,
    pub origin: String,
    pub entry_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub category: String,
    #[serde(default = "default_supplier")]
    pub supplier: String,
    #[serde(default)]
    pub unit_price: f64,
}

fn default_supplier() -> String {
    DEFAULT_SUPPLIER.to_string()
}

impl ProductEntity {
    pub fn from_domain(product: &Product) -> Self {
        Self {
            id: product.id.value(),
            name: product.name.clone(),
            qty: product.qty,
            origin: product.origin.clone(),
            entry_date: product.entry_date,
            expiry_date: product.expiry_date,
            category: product.category.clone(),
            supplier: product.supplier.clone(),
            unit_price: product.unit_price,
        }
    }

    pub fn into_domain(self) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name,
            category: self.category,
            qty: self.qty,
            unit_price: self.unit_price,
            origin: self.origin,
            supplier: self.supplier,
            entry_date: self.entry_date,
            expiry_date: self.expiry_date,
        }
    }
}

/// The whole persisted state: `{ "products": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryDocument {
    pub products: Vec<ProductEntity>,
}

impl InventoryDocument {
    pub fn from_products(products: &[Product]) -> Self {
        Self {
            products: products.iter().map(ProductEntity::from_domain).collect(),
        }
    }

    pub fn into_products(self) -> Vec<Product> {
        self.products
            .into_iter()
            .map(ProductEntity::into_domain)
            .collect()
    }
}
