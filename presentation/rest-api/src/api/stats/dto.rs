use std::collections::BTreeMap;

use poem_openapi::Object;

use business::domain::product::stats::{CategoryStats, DashboardStats};
use business::domain::product::use_cases::get_alerts::ExpiryAlerts;
use business::domain::product::value_objects::FreshnessStatus;

use crate::api::product::dto::ProductResponse;

#[derive(Debug, Clone, Object)]
pub struct CategoryStatsResponse {
    /// Number of products in the category
    pub count: u64,
    /// Summed quantity across the category
    pub quantity: u64,
}

impl From<CategoryStats> for CategoryStatsResponse {
    fn from(stats: CategoryStats) -> Self {
        Self {
            count: stats.count,
            quantity: stats.quantity,
        }
    }
}

/// Percentage of products in each freshness tier, one decimal place.
#[derive(Debug, Clone, Object)]
pub struct StatusShareResponse {
    pub expired: f64,
    pub warning: f64,
    pub good: f64,
}

#[derive(Debug, Clone, Object)]
pub struct DashboardStatsResponse {
    pub total_products: u64,
    pub total_quantity: u64,
    /// Inventory value (Σ qty × unitPrice) with two decimals
    pub total_value: String,
    pub expired_count: u64,
    pub warning_count: u64,
    pub good_count: u64,
    pub category_stats: BTreeMap<String, CategoryStatsResponse>,
    pub status_share: StatusShareResponse,
}

/// Share of `count` in `total` as a percentage; an empty inventory yields 0.
fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 * 1000.0 / total as f64).round() / 10.0
}

impl From<DashboardStats> for DashboardStatsResponse {
    fn from(stats: DashboardStats) -> Self {
        let share = |status| percentage(stats.count_for(status), stats.total_products);
        let status_share = StatusShareResponse {
            expired: share(FreshnessStatus::Expired),
            warning: share(FreshnessStatus::Warning),
            good: share(FreshnessStatus::Good),
        };

        Self {
            total_products: stats.total_products,
            total_quantity: stats.total_quantity,
            total_value: stats.formatted_total_value(),
            expired_count: stats.expired_count,
            warning_count: stats.warning_count,
            good_count: stats.good_count,
            status_share,
            category_stats: stats
                .category_stats
                .into_iter()
                .map(|(category, entry)| (category, entry.into()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ExpiryAlertsResponse {
    /// Products expiring within the warning window, soonest first
    pub warning: Vec<ProductResponse>,
    /// Products already expired, longest expired first
    pub expired: Vec<ProductResponse>,
}

impl From<ExpiryAlerts> for ExpiryAlertsResponse {
    fn from(alerts: ExpiryAlerts) -> Self {
        Self {
            warning: alerts.warning.into_iter().map(Into::into).collect(),
            expired: alerts.expired.into_iter().map(Into::into).collect(),
        }
    }
}
