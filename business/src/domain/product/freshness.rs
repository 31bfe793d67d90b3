use chrono::NaiveDate;

use super::model::Product;
use super::value_objects::FreshnessStatus;

/// Products with at most this many days left are flagged as `Warning`.
pub const WARNING_WINDOW_DAYS: i64 = 7;

/// A stored product together with its freshness as of a given day.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedProduct {
    pub product: Product,
    pub days_remaining: i64,
    pub status: FreshnessStatus,
}

/// Whole days from `today` until `expiry_date`.
///
/// Dates carry no time of day, so the difference is exact: 0 for a product
/// expiring today, 1 for tomorrow, negative once the date has passed.
pub fn days_remaining(expiry_date: NaiveDate, today: NaiveDate) -> i64 {
    (expiry_date - today).num_days()
}

/// Classifies a day count.
///
/// Business rules:
/// - 0 or fewer days -> Expired
/// - 1 to 7 days -> Warning
/// - more than 7 days -> Good
pub fn status_for(days_remaining: i64) -> FreshnessStatus {
    if days_remaining <= 0 {
        FreshnessStatus::Expired
    } else if days_remaining <= WARNING_WINDOW_DAYS {
        FreshnessStatus::Warning
    } else {
        FreshnessStatus::Good
    }
}

pub fn status_of(product: &Product, today: NaiveDate) -> FreshnessStatus {
    status_for(days_remaining(product.expiry_date, today))
}

pub fn enrich(product: Product, today: NaiveDate) -> EnrichedProduct {
    let days_remaining = days_remaining(product.expiry_date, today);
    EnrichedProduct {
        status: status_for(days_remaining),
        days_remaining,
        product,
    }
}

pub fn enrich_all(products: Vec<Product>, today: NaiveDate) -> Vec<EnrichedProduct> {
    products.into_iter().map(|p| enrich(p, today)).collect()
}
