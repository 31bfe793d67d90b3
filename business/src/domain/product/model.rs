use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::ProductError;
use super::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub qty: u64,
    pub unit_price: f64,
    pub origin: String,
    pub supplier: String,
    pub entry_date: NaiveDate,
    pub expiry_date: NaiveDate,
}

/// A validated product waiting for an id from the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub qty: u64,
    pub unit_price: f64,
    pub origin: String,
    pub supplier: String,
    pub entry_date: NaiveDate,
    pub expiry_date: NaiveDate,
}

impl NewProduct {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        category: String,
        qty: u64,
        unit_price: f64,
        origin: String,
        supplier: String,
        entry_date: NaiveDate,
        expiry_date: NaiveDate,
    ) -> Result<Self, ProductError> {
        if name.trim().is_empty() {
            return Err(ProductError::MissingField("name"));
        }
        if category.trim().is_empty() {
            return Err(ProductError::MissingField("category"));
        }
        if expiry_date < entry_date {
            return Err(ProductError::ExpiryBeforeEntry);
        }

        Ok(Self {
            name,
            category,
            qty,
            unit_price,
            origin,
            supplier,
            entry_date,
            expiry_date,
        })
    }

    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
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

/// Partial update; `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub category: Option<String>,
    pub qty: Option<u64>,
    pub unit_price: Option<f64>,
    pub origin: Option<String>,
    pub supplier: Option<String>,
    pub entry_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
}

impl Product {
    /// Merges the supplied fields onto this product.
    pub fn apply(&mut self, changes: &ProductChanges) {
        if let Some(name) = &changes.name {
            self.name = name.clone();
        }
        if let Some(category) = &changes.category {
            self.category = category.clone();
        }
        if let Some(qty) = changes.qty {
            self.qty = qty;
        }
        if let Some(unit_price) = changes.unit_price {
            self.unit_price = unit_price;
        }
        if let Some(origin) = &changes.origin {
            self.origin = origin.clone();
        }
        if let Some(supplier) = &changes.supplier {
            self.supplier = supplier.clone();
        }
        if let Some(entry_date) = changes.entry_date {
            self.entry_date = entry_date;
        }
        if let Some(expiry_date) = changes.expiry_date {
            self.expiry_date = expiry_date;
        }
    }

    /// Returns the merged product, rejecting a merge that would put the
    /// expiry date before the entry date.
    pub fn merged(&self, changes: &ProductChanges) -> Result<Product, ProductError> {
        let mut merged = self.clone();
        merged.apply(changes);
        if merged.expiry_date < merged.entry_date {
            return Err(ProductError::ExpiryBeforeEntry);
        }
        Ok(merged)
    }

    /// Stock value of this line, `qty * unit_price`.
    pub fn value(&self) -> f64 {
        self.qty as f64 * self.unit_price
    }
}
