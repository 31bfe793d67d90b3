use chrono::NaiveDate;
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use business::domain::product::freshness::EnrichedProduct;
use business::domain::product::value_objects::FreshnessStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum)]
pub enum FreshnessStatusDto {
    #[oai(rename = "expired")]
    Expired,
    #[oai(rename = "warning")]
    Warning,
    #[oai(rename = "good")]
    Good,
}

impl From<FreshnessStatus> for FreshnessStatusDto {
    fn from(status: FreshnessStatus) -> Self {
        match status {
            FreshnessStatus::Expired => FreshnessStatusDto::Expired,
            FreshnessStatus::Warning => FreshnessStatusDto::Warning,
            FreshnessStatus::Good => FreshnessStatusDto::Good,
        }
    }
}

impl From<FreshnessStatusDto> for FreshnessStatus {
    fn from(dto: FreshnessStatusDto) -> Self {
        match dto {
            FreshnessStatusDto::Expired => FreshnessStatus::Expired,
            FreshnessStatusDto::Warning => FreshnessStatus::Warning,
            FreshnessStatusDto::Good => FreshnessStatus::Good,
        }
    }
}

/// Body of `POST /products`.
///
/// Every field is optional at the wire level so missing ones surface as
/// `product.missing_field.<name>` instead of a generic parse failure.
#[derive(Debug, Clone, Default, Object)]
pub struct CreateProductRequest {
    /// Product name
    pub name: Option<String>,
    /// Category used for dashboard grouping
    pub category: Option<String>,
    /// Stock quantity; numbers are truncated, numeric strings accepted
    pub qty: Option<Value>,
    /// Unit price; invalid or negative values become 0
    pub unit_price: Option<Value>,
    /// Country or region of origin
    pub origin: Option<String>,
    /// Supplier (defaults to "Unspecified")
    pub supplier: Option<String>,
    /// Entry date, YYYY-MM-DD
    pub entry_date: Option<String>,
    /// Expiry date, YYYY-MM-DD
    pub expiry_date: Option<String>,
}

/// Body of `PUT /products/:id`. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Object)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub qty: Option<Value>,
    pub unit_price: Option<Value>,
    pub origin: Option<String>,
    pub supplier: Option<String>,
    pub entry_date: Option<String>,
    pub expiry_date: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: i64,
    pub name: String,
    pub category: String,
    pub qty: u64,
    pub unit_price: f64,
    pub origin: String,
    pub supplier: String,
    pub entry_date: NaiveDate,
    pub expiry_date: NaiveDate,
    /// Whole days until expiry, negative once expired
    pub days_remaining: i64,
    /// Freshness tier derived from `daysRemaining`
    pub status: FreshnessStatusDto,
}

impl From<EnrichedProduct> for ProductResponse {
    fn from(item: EnrichedProduct) -> Self {
        let product = item.product;
        Self {
            id: product.id.value(),
            name: product.name,
            category: product.category,
            qty: product.qty,
            unit_price: product.unit_price,
            origin: product.origin,
            supplier: product.supplier,
            entry_date: product.entry_date,
            expiry_date: product.expiry_date,
            days_remaining: item.days_remaining,
            status: item.status.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MessageResponse {
    pub message: String,
}
