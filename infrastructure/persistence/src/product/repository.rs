use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::{Mutex, RwLock};
use tracing::{error, info, warn};

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product, ProductChanges};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

use super::entity::InventoryDocument;
use crate::seed::seed_products;
use crate::store::JsonStore;

/// Product repository backed by a single JSON document.
///
/// The collection lives in memory and is replaced only after the full
/// document has been written. Mutations are serialized through `writer`,
/// so concurrent creates cannot read the same snapshot and lose each other.
pub struct ProductRepositoryJson {
    store: JsonStore,
    products: RwLock<Vec<Product>>,
    writer: Mutex<()>,
}

impl ProductRepositoryJson {
    /// Loads the inventory from `store`.
    ///
    /// A missing file is seeded with starter products dated around `today`.
    /// An unreadable or corrupt file is moved aside to `*.json.corrupt`,
    /// logged, and the repository starts empty.
    pub async fn open(store: JsonStore, today: NaiveDate) -> Self {
        let products = match store.load().await {
            Ok(Some(document)) => document.into_products(),
            Ok(None) => {
                let seeded = seed_products(today);
                match store.save(&InventoryDocument::from_products(&seeded)).await {
                    Ok(()) => info!(
                        path = %store.path().display(),
                        count = seeded.len(),
                        "Initialized inventory with seed data"
                    ),
                    Err(e) => error!(
                        path = %store.path().display(),
                        error = %e,
                        "Failed to write seed inventory"
                    ),
                }
                seeded
            }
            Err(e) => {
                error!(
                    path = %store.path().display(),
                    error = %e,
                    "Failed to read inventory, starting empty"
                );
                match store.quarantine().await {
                    Ok(moved) => warn!(
                        path = %moved.display(),
                        "Kept unreadable inventory for inspection"
                    ),
                    Err(e) => error!(
                        path = %store.path().display(),
                        error = %e,
                        "Failed to move unreadable inventory aside"
                    ),
                }
                Vec::new()
            }
        };

        Self {
            store,
            products: RwLock::new(products),
            writer: Mutex::new(()),
        }
    }

    /// Runs `mutate` on a copy of the collection, persists the result and
    /// only then publishes it. Nothing is written when `mutate` fails.
    async fn commit<T, F>(&self, mutate: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&mut Vec<Product>) -> Result<T, RepositoryError> + Send,
        T: Send,
    {
        let _guard = self.writer.lock().await;

        let mut next = self.products.read().await.clone();
        let output = mutate(&mut next)?;

        self.store
            .save(&InventoryDocument::from_products(&next))
            .await
            .map_err(|e| {
                error!(
                    path = %self.store.path().display(),
                    error = %e,
                    "Failed to persist inventory"
                );
                RepositoryError::Persistence
            })?;

        *self.products.write().await = next;
        Ok(output)
    }
}

/// Next id: the current Unix time in milliseconds, bumped past every
/// existing id so rapid sequential inserts never collide. Fails once the
/// stored ids leave no room above them.
fn next_id(products: &[Product], now_millis: i64) -> Result<ProductId, RepositoryError> {
    let highest = products.iter().map(|p| p.id.value()).max().unwrap_or(0);
    let bumped = highest.checked_add(1).ok_or_else(|| {
        error!(highest, "No product id left above the stored maximum");
        RepositoryError::Persistence
    })?;
    Ok(ProductId::new(now_millis.max(bumped)))
}

#[async_trait]
impl ProductRepository for ProductRepositoryJson {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.read().await.clone())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        self.products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn insert(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let now_millis = Utc::now().timestamp_millis();
        self.commit(move |products| {
            let product = product.with_id(next_id(products, now_millis)?);
            products.push(product.clone());
            Ok(product)
        })
        .await
    }

    async fn update(
        &self,
        id: ProductId,
        changes: &ProductChanges,
    ) -> Result<Product, RepositoryError> {
        self.commit(|products| {
            let product = products
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(RepositoryError::NotFound)?;
            // Date order is checked against the record held under the writer lock
            let merged = product
                .merged(changes)
                .map_err(|_| RepositoryError::ExpiryBeforeEntry)?;
            *product = merged.clone();
            Ok(merged)
        })
        .await
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        self.commit(|products| {
            let before = products.len();
            products.retain(|p| p.id != id);
            if products.len() == before {
                warn!(id = %id, "Delete requested for unknown product");
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreConfig;
    use std::collections::HashSet;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 18).unwrap()
    }

    fn store_in(dir: &TempDir) -> JsonStore {
        JsonStore::new(&StoreConfig::new(dir.path().join("db.json")))
    }

    async fn empty_repository(dir: &TempDir) -> ProductRepositoryJson {
        let store = store_in(dir);
        store.save(&InventoryDocument::default()).await.unwrap();
        ProductRepositoryJson::open(store, today()).await
    }

    fn cheese() -> NewProduct {
        NewProduct::new(
            "Goat Cheese".to_string(),
            "Dairy".to_string(),
            12,
            4.5,
            "France".to_string(),
            "Fromagerie".to_string(),
            today(),
            today() + chrono::Duration::days(20),
        )
        .unwrap()
    }

    async fn on_disk(dir: &TempDir) -> Vec<Product> {
        store_in(dir)
            .load()
            .await
            .unwrap()
            .unwrap()
            .into_products()
    }

    #[tokio::test]
    async fn should_seed_and_persist_when_file_is_missing() {
        let dir = TempDir::new().unwrap();

        let repository = ProductRepositoryJson::open(store_in(&dir), today()).await;

        let products = repository.get_all().await.unwrap();
        assert_eq!(products.len(), 3);
        assert_eq!(on_disk(&dir).await, products);
    }

    #[tokio::test]
    async fn should_start_empty_when_file_is_corrupt() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("db.json"), "[[[").unwrap();

        let repository = ProductRepositoryJson::open(store_in(&dir), today()).await;

        assert!(repository.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_keep_corrupt_file_after_first_mutation() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("db.json"), "[[[").unwrap();
        let repository = ProductRepositoryJson::open(store_in(&dir), today()).await;

        let created = repository.insert(cheese()).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(dir.path().join("db.json.corrupt")).unwrap(),
            "[[["
        );
        assert_eq!(on_disk(&dir).await, vec![created]);
    }

    #[tokio::test]
    async fn should_insert_with_defaults_and_persist() {
        let dir = TempDir::new().unwrap();
        let repository = empty_repository(&dir).await;

        let created = repository.insert(cheese()).await.unwrap();

        let products = repository.get_all().await.unwrap();
        assert_eq!(products, vec![created.clone()]);
        assert_eq!(created, cheese().with_id(created.id));
        assert_eq!(on_disk(&dir).await, vec![created]);
    }

    #[tokio::test]
    async fn should_assign_unique_increasing_ids_under_rapid_inserts() {
        let dir = TempDir::new().unwrap();
        let repository = empty_repository(&dir).await;

        let mut ids = Vec::new();
        for _ in 0..20 {
            ids.push(repository.insert(cheese()).await.unwrap().id);
        }

        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[tokio::test]
    async fn should_not_lose_concurrent_inserts() {
        let dir = TempDir::new().unwrap();
        let repository = Arc::new(empty_repository(&dir).await);

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let repository = repository.clone();
                tokio::spawn(async move { repository.insert(cheese()).await.unwrap().id })
            })
            .collect();
        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap());
        }

        assert_eq!(ids.len(), 16);
        assert_eq!(on_disk(&dir).await.len(), 16);
    }

    #[tokio::test]
    async fn should_merge_partial_update() {
        let dir = TempDir::new().unwrap();
        let repository = empty_repository(&dir).await;
        let created = repository.insert(cheese()).await.unwrap();

        let updated = repository
            .update(
                created.id,
                &ProductChanges {
                    qty: Some(5),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated, Product { qty: 5, ..created });
        assert_eq!(on_disk(&dir).await, vec![updated]);
    }

    #[tokio::test]
    async fn should_reject_sequential_updates_that_cross_dates() {
        // Each change is valid against the original record on its own
        let dir = TempDir::new().unwrap();
        let repository = empty_repository(&dir).await;
        let created = repository.insert(cheese()).await.unwrap();
        let later_entry = ProductChanges {
            entry_date: Some(created.expiry_date - chrono::Duration::days(1)),
            ..Default::default()
        };
        let earlier_expiry = ProductChanges {
            expiry_date: Some(created.entry_date + chrono::Duration::days(1)),
            ..Default::default()
        };
        assert!(created.merged(&later_entry).is_ok());
        assert!(created.merged(&earlier_expiry).is_ok());

        let first = repository.update(created.id, &later_entry).await.unwrap();
        let second = repository.update(created.id, &earlier_expiry).await;

        assert!(matches!(second, Err(RepositoryError::ExpiryBeforeEntry)));
        assert_eq!(repository.get_all().await.unwrap(), vec![first.clone()]);
        assert_eq!(on_disk(&dir).await, vec![first.clone()]);
        assert!(first.expiry_date >= first.entry_date);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_unknown_id() {
        let dir = TempDir::new().unwrap();
        let repository = ProductRepositoryJson::open(store_in(&dir), today()).await;
        let before = repository.get_all().await.unwrap();

        let result = repository
            .update(
                ProductId::new(999999),
                &ProductChanges {
                    name: Some("Ghost".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
        assert_eq!(repository.get_all().await.unwrap(), before);
        assert_eq!(on_disk(&dir).await, before);
    }

    #[tokio::test]
    async fn should_signal_not_found_on_second_delete() {
        let dir = TempDir::new().unwrap();
        let repository = ProductRepositoryJson::open(store_in(&dir), today()).await;
        let id = ProductId::new(2);

        let first = repository.delete(id).await;
        let remaining = repository.get_all().await.unwrap();
        let second = repository.delete(id).await;

        assert!(first.is_ok());
        assert!(matches!(second, Err(RepositoryError::NotFound)));
        assert_eq!(remaining.len(), 2);
        assert_eq!(repository.get_all().await.unwrap(), remaining);
        assert_eq!(on_disk(&dir).await, remaining);
    }

    #[tokio::test]
    async fn should_keep_snapshot_when_write_fails() {
        let dir = TempDir::new().unwrap();
        // A plain file where the data directory should be makes every write fail
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let store = JsonStore::new(&StoreConfig::new(blocker.join("db.json")));
        let repository = ProductRepositoryJson::open(store, today()).await;
        let before = repository.get_all().await.unwrap();

        let result = repository.insert(cheese()).await;

        assert!(matches!(result, Err(RepositoryError::Persistence)));
        assert_eq!(repository.get_all().await.unwrap(), before);
    }

    #[test]
    fn should_bump_id_past_existing_ids() {
        let existing = vec![cheese().with_id(ProductId::new(5_000))];

        assert_eq!(next_id(&existing, 4_000).unwrap(), ProductId::new(5_001));
        assert_eq!(next_id(&existing, 9_000).unwrap(), ProductId::new(9_000));
        assert_eq!(next_id(&[], 42).unwrap(), ProductId::new(42));
    }

    #[tokio::test]
    async fn should_refuse_insert_when_max_id_is_stored() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let document =
            InventoryDocument::from_products(&[cheese().with_id(ProductId::new(i64::MAX))]);
        store.save(&document).await.unwrap();
        let repository = ProductRepositoryJson::open(store, today()).await;

        let result = repository.insert(cheese()).await;

        assert!(matches!(result, Err(RepositoryError::Persistence)));
        assert_eq!(repository.get_all().await.unwrap().len(), 1);
    }
}
