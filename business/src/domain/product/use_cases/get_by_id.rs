use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::freshness::EnrichedProduct;
use crate::domain::product::value_objects::ProductId;

pub struct GetProductByIdParams {
    pub id: ProductId,
}

#[async_trait]
pub trait GetProductByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetProductByIdParams) -> Result<EnrichedProduct, ProductError>;
}
