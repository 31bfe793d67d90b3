use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::input::required_text;
use crate::domain::clock::Clock;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::freshness::{EnrichedProduct, enrich};
use crate::domain::product::model::NewProduct;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::value_objects::{
    DEFAULT_SUPPLIER, parse_calendar_date, parse_quantity, parse_unit_price,
};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

impl CreateProductUseCaseImpl {
    fn validate(params: CreateProductParams) -> Result<NewProduct, ProductError> {
        let name = required_text("name", params.name)?;
        let qty = params
            .qty
            .filter(|raw| !raw.is_null())
            .ok_or(ProductError::MissingField("qty"))?;
        let origin = required_text("origin", params.origin)?;
        let entry_date = required_text("entryDate", params.entry_date)?;
        let expiry_date = required_text("expiryDate", params.expiry_date)?;
        let category = required_text("category", params.category)?;

        let supplier = params
            .supplier
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SUPPLIER.to_string());
        let unit_price = params.unit_price.as_ref().map(parse_unit_price).unwrap_or(0.0);

        NewProduct::new(
            name,
            category,
            parse_quantity(&qty),
            unit_price,
            origin,
            supplier,
            parse_calendar_date("entryDate", &entry_date)?,
            parse_calendar_date("expiryDate", &expiry_date)?,
        )
    }
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<EnrichedProduct, ProductError> {
        self.logger.info(&format!(
            "Creating product: {}",
            params.name.as_deref().unwrap_or_default()
        ));

        let new_product = Self::validate(params).inspect_err(|e| {
            self.logger.warn(&format!("Rejected product creation: {}", e));
        })?;

        let product = self.repository.insert(new_product).await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(enrich(product, self.clock.today()))
    }
}
