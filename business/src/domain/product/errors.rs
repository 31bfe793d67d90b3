#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.missing_field.{0}")]
    MissingField(&'static str),
    #[error("product.invalid_date.{0}")]
    InvalidDate(&'static str),
    #[error("product.expiry_before_entry")]
    ExpiryBeforeEntry,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ProductError {
    /// Maps a repository failure, turning a missing row into `ProductError::NotFound`
    /// and a rejected date order into `ProductError::ExpiryBeforeEntry`.
    pub fn from_lookup(err: crate::domain::errors::RepositoryError) -> Self {
        match err {
            crate::domain::errors::RepositoryError::NotFound => ProductError::NotFound,
            crate::domain::errors::RepositoryError::ExpiryBeforeEntry => {
                ProductError::ExpiryBeforeEntry
            }
            other => ProductError::Repository(other),
        }
    }
}
