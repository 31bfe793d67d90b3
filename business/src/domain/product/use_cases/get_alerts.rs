use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::freshness::EnrichedProduct;

/// Products that need attention, split by tier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpiryAlerts {
    pub warning: Vec<EnrichedProduct>,
    pub expired: Vec<EnrichedProduct>,
}

#[async_trait]
pub trait GetExpiryAlertsUseCase: Send + Sync {
    async fn execute(&self) -> Result<ExpiryAlerts, ProductError>;
}
