use async_trait::async_trait;
use serde_json::Value;

use crate::domain::product::errors::ProductError;
use crate::domain::product::freshness::EnrichedProduct;

/// Raw creation input, validated and coerced by the use case.
#[derive(Debug, Clone, Default)]
pub struct CreateProductParams {
    pub name: Option<String>,
    pub category: Option<String>,
    pub qty: Option<Value>,
    pub unit_price: Option<Value>,
    pub origin: Option<String>,
    pub supplier: Option<String>,
    pub entry_date: Option<String>,
    pub expiry_date: Option<String>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<EnrichedProduct, ProductError>;
}
