use super::freshness::EnrichedProduct;
use super::value_objects::FreshnessStatus;

/// Listing filter: an optional freshness tier and a free-text search that
/// matches name, category or origin, ignoring case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub status: Option<FreshnessStatus>,
    pub search: Option<String>,
}

impl ProductFilter {
    pub fn matches(&self, item: &EnrichedProduct) -> bool {
        if let Some(status) = self.status
            && item.status != status
        {
            return false;
        }

        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                let product = &item.product;
                [&product.name, &product.category, &product.origin]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&term))
            }
        }
    }
}
