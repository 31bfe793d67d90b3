use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::product::use_cases::get_alerts::GetExpiryAlertsUseCase;
use business::domain::product::use_cases::get_stats::GetDashboardStatsUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::stats::dto::{DashboardStatsResponse, ExpiryAlertsResponse};
use crate::api::tags::ApiTags;

pub struct DashboardApi {
    stats_use_case: Arc<dyn GetDashboardStatsUseCase>,
    alerts_use_case: Arc<dyn GetExpiryAlertsUseCase>,
}

impl DashboardApi {
    pub fn new(
        stats_use_case: Arc<dyn GetDashboardStatsUseCase>,
        alerts_use_case: Arc<dyn GetExpiryAlertsUseCase>,
    ) -> Self {
        Self {
            stats_use_case,
            alerts_use_case,
        }
    }
}

/// Dashboard API
///
/// Aggregated figures for the inventory dashboard.
#[OpenApi]
impl DashboardApi {
    /// Inventory statistics
    ///
    /// Totals, value, per-tier counts and per-category breakdown as of today.
    #[oai(path = "/stats", method = "get", tag = "ApiTags::Dashboard")]
    async fn get_stats(&self) -> GetStatsResponse {
        match self.stats_use_case.execute().await {
            Ok(stats) => GetStatsResponse::Ok(Json(stats.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetStatsResponse::InternalError(json)
            }
        }
    }

    /// Expiry alerts
    ///
    /// Products in the warning window and products already expired.
    #[oai(path = "/alerts", method = "get", tag = "ApiTags::Dashboard")]
    async fn get_alerts(&self) -> GetAlertsResponse {
        match self.alerts_use_case.execute().await {
            Ok(alerts) => GetAlertsResponse::Ok(Json(alerts.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAlertsResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetStatsResponse {
    #[oai(status = 200)]
    Ok(Json<DashboardStatsResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAlertsResponse {
    #[oai(status = 200)]
    Ok(Json<ExpiryAlertsResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
