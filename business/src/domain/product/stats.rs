use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::freshness::status_of;
use super::model::Product;
use super::value_objects::FreshnessStatus;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryStats {
    pub count: u64,
    pub quantity: u64,
}

/// Dashboard aggregates over the whole inventory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub total_products: u64,
    pub total_quantity: u64,
    pub total_value: f64,
    pub expired_count: u64,
    pub warning_count: u64,
    pub good_count: u64,
    pub category_stats: BTreeMap<String, CategoryStats>,
}

impl DashboardStats {
    /// Total stock value with exactly two decimals, e.g. `"332.50"`.
    pub fn formatted_total_value(&self) -> String {
        format!("{:.2}", self.total_value)
    }

    pub fn count_for(&self, status: FreshnessStatus) -> u64 {
        match status {
            FreshnessStatus::Expired => self.expired_count,
            FreshnessStatus::Warning => self.warning_count,
            FreshnessStatus::Good => self.good_count,
        }
    }
}

/// Computes dashboard statistics as of `today`.
pub fn compute_stats(products: &[Product], today: NaiveDate) -> DashboardStats {
    let mut stats = DashboardStats {
        total_products: products.len() as u64,
        ..Default::default()
    };

    for product in products {
        stats.total_quantity = stats.total_quantity.saturating_add(product.qty);
        stats.total_value += product.value();

        match status_of(product, today) {
            FreshnessStatus::Expired => stats.expired_count += 1,
            FreshnessStatus::Warning => stats.warning_count += 1,
            FreshnessStatus::Good => stats.good_count += 1,
        }

        let category = stats
            .category_stats
            .entry(product.category.clone())
            .or_default();
        category.count += 1;
        category.quantity = category.quantity.saturating_add(product.qty);
    }

    stats
}
