use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::stats::DashboardStats;

#[async_trait]
pub trait GetDashboardStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<DashboardStats, ProductError>;
}
