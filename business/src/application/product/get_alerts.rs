use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::clock::Clock;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::freshness::enrich_all;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_alerts::{ExpiryAlerts, GetExpiryAlertsUseCase};
use crate::domain::product::value_objects::FreshnessStatus;

pub struct GetExpiryAlertsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetExpiryAlertsUseCase for GetExpiryAlertsUseCaseImpl {
    async fn execute(&self) -> Result<ExpiryAlerts, ProductError> {
        let products = self.repository.get_all().await?;

        let mut alerts = ExpiryAlerts::default();
        for item in enrich_all(products, self.clock.today()) {
            match item.status {
                FreshnessStatus::Warning => alerts.warning.push(item),
                FreshnessStatus::Expired => alerts.expired.push(item),
                FreshnessStatus::Good => {}
            }
        }
        // Most urgent first
        alerts.warning.sort_by_key(|item| item.days_remaining);
        alerts.expired.sort_by_key(|item| item.days_remaining);

        self.logger.info(&format!(
            "Expiry alerts: {} warning, {} expired",
            alerts.warning.len(),
            alerts.expired.len()
        ));
        Ok(alerts)
    }
}
