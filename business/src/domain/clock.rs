use chrono::{NaiveDate, Utc};

/// Source of the current calendar date.
///
/// Freshness is always derived at read time, so every use case that enriches
/// products takes a clock instead of calling `Utc::now()` directly.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall clock, reading the current UTC date.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
