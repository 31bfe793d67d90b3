use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::clock::Clock;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::filter::ProductFilter;
use crate::domain::product::freshness::{EnrichedProduct, enrich_all};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, filter: ProductFilter) -> Result<Vec<EnrichedProduct>, ProductError> {
        self.logger.info("Fetching all products");
        let products = self.repository.get_all().await?;
        let total = products.len();

        let enriched: Vec<EnrichedProduct> = enrich_all(products, self.clock.today())
            .into_iter()
            .filter(|item| filter.matches(item))
            .collect();

        self.logger.info(&format!(
            "Found {} products ({} matching filter)",
            total,
            enriched.len()
        ));
        Ok(enriched)
    }
}
