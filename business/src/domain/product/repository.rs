use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product, ProductChanges};
use super::value_objects::ProductId;

/// Owner of the authoritative product collection.
///
/// Mutations are atomic from the caller's point of view: once they return
/// `Ok`, the whole collection has been persisted.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    /// Stores a new product under a freshly assigned, unique id.
    async fn insert(&self, product: NewProduct) -> Result<Product, RepositoryError>;
    async fn update(
        &self,
        id: ProductId,
        changes: &ProductChanges,
    ) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
}
