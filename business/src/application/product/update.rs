use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::input::non_blank_text;
use crate::domain::clock::Clock;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::freshness::{EnrichedProduct, enrich};
use crate::domain::product::model::ProductChanges;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::value_objects::{
    DEFAULT_SUPPLIER, parse_calendar_date, parse_quantity, parse_unit_price,
};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

impl UpdateProductUseCaseImpl {
    fn changes_from(params: UpdateProductParams) -> Result<ProductChanges, ProductError> {
        Ok(ProductChanges {
            name: non_blank_text("name", params.name)?,
            category: non_blank_text("category", params.category)?,
            origin: non_blank_text("origin", params.origin)?,
            supplier: params.supplier.map(|s| {
                let s = s.trim();
                if s.is_empty() {
                    DEFAULT_SUPPLIER.to_string()
                } else {
                    s.to_string()
                }
            }),
            qty: params.qty.as_ref().map(parse_quantity),
            unit_price: params.unit_price.as_ref().map(parse_unit_price),
            entry_date: params
                .entry_date
                .map(|d| parse_calendar_date("entryDate", &d))
                .transpose()?,
            expiry_date: params
                .expiry_date
                .map(|d| parse_calendar_date("expiryDate", &d))
                .transpose()?,
        })
    }
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<EnrichedProduct, ProductError> {
        let id = params.id;
        self.logger.info(&format!("Updating product: {}", id));

        let changes = Self::changes_from(params).inspect_err(|e| {
            self.logger
                .warn(&format!("Rejected update of product {}: {}", id, e));
        })?;

        // Early check; the repository re-validates dates under its writer lock
        let existing = self
            .repository
            .get_by_id(id)
            .await
            .map_err(ProductError::from_lookup)?;
        existing.merged(&changes)?;

        let updated = self
            .repository
            .update(id, &changes)
            .await
            .map_err(ProductError::from_lookup)?;

        self.logger.info(&format!("Product updated: {}", updated.id));
        Ok(enrich(updated, self.clock.today()))
    }
}
