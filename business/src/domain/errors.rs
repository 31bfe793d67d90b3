/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
    /// The stored record would end up expiring before its entry date.
    #[error("repository.expiry_before_entry")]
    ExpiryBeforeEntry,
}
