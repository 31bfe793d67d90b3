use async_trait::async_trait;
use serde_json::Value;

use crate::domain::product::errors::ProductError;
use crate::domain::product::freshness::EnrichedProduct;
use crate::domain::product::value_objects::ProductId;

/// Partial update input; absent fields keep their stored value.
#[derive(Debug, Clone)]
pub struct UpdateProductParams {
    pub id: ProductId,
    pub name: Option<String>,
    pub category: Option<String>,
    pub qty: Option<Value>,
    pub unit_price: Option<Value>,
    pub origin: Option<String>,
    pub supplier: Option<String>,
    pub entry_date: Option<String>,
    pub expiry_date: Option<String>,
}

impl UpdateProductParams {
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            name: None,
            category: None,
            qty: None,
            unit_price: None,
            origin: None,
            supplier: None,
            entry_date: None,
            expiry_date: None,
        }
    }
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<EnrichedProduct, ProductError>;
}
