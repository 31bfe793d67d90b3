use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use business::domain::product::use_cases::get_stats::GetDashboardStatsUseCase;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// "healthy", or "degraded" when the inventory cannot be read
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// Number of products currently held
    pub products: u64,
}

/// Health API for monitoring and infrastructure checks
pub struct HealthApi {
    stats_use_case: Arc<dyn GetDashboardStatsUseCase>,
}

impl HealthApi {
    pub fn new(stats_use_case: Arc<dyn GetDashboardStatsUseCase>) -> Self {
        Self { stats_use_case }
    }
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// ## Response
    /// - `status`: "healthy" if the inventory is readable
    /// - `timestamp`: Current server timestamp in ISO 8601 format
    /// - `version`: Service version from Cargo.toml
    /// - `products`: Size of the inventory
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        let (status, products) = match self.stats_use_case.execute().await {
            Ok(stats) => ("healthy", stats.total_products),
            Err(e) => {
                warn!(error = %e, "Health check could not read inventory");
                ("degraded", 0)
            }
        };

        Json(HealthCheckResponse {
            status: status.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            products,
        })
    }
}
