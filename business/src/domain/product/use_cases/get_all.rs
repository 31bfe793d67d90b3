use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::filter::ProductFilter;
use crate::domain::product::freshness::EnrichedProduct;

#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self, filter: ProductFilter) -> Result<Vec<EnrichedProduct>, ProductError>;
}
