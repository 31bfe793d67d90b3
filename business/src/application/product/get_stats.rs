use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::clock::Clock;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::stats::{DashboardStats, compute_stats};
use crate::domain::product::use_cases::get_stats::GetDashboardStatsUseCase;

pub struct GetDashboardStatsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetDashboardStatsUseCase for GetDashboardStatsUseCaseImpl {
    async fn execute(&self) -> Result<DashboardStats, ProductError> {
        self.logger.debug("Computing dashboard statistics");
        let products = self.repository.get_all().await?;
        Ok(compute_stats(&products, self.clock.today()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::FixedClock;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{NewProduct, Product, ProductChanges};
    use crate::domain::product::value_objects::ProductId;
    use chrono::{Duration, NaiveDate};
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
            async fn insert(&self, product: NewProduct) -> Result<Product, RepositoryError>;
            async fn update(&self, id: ProductId, changes: &ProductChanges) -> Result<Product, RepositoryError>;
            async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_compute_stats_as_of_clock_date() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 18).unwrap();
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(move || {
            Ok([(1, -1), (2, 3), (3, 30)]
                .into_iter()
                .map(|(id, expires_in)| Product {
                    id: ProductId::new(id),
                    name: format!("Item {}", id),
                    category: "Produce".to_string(),
                    qty: 10,
                    unit_price: 0.5,
                    origin: "Senegal".to_string(),
                    supplier: "Southern Growers".to_string(),
                    entry_date: today - Duration::days(5),
                    expiry_date: today + Duration::days(expires_in),
                })
                .collect())
        });

        let use_case = GetDashboardStatsUseCaseImpl {
            repository: Arc::new(mock_repo),
            clock: Arc::new(FixedClock(today)),
            logger: mock_logger(),
        };

        let stats = use_case.execute().await.unwrap();

        assert_eq!(stats.total_products, 3);
        assert_eq!(stats.total_quantity, 30);
        assert_eq!(stats.formatted_total_value(), "15.00");
        assert_eq!(
            (stats.expired_count, stats.warning_count, stats.good_count),
            (1, 1, 1)
        );
        assert_eq!(stats.category_stats["Produce"].count, 3);
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::Persistence));

        let use_case = GetDashboardStatsUseCaseImpl {
            repository: Arc::new(mock_repo),
            clock: Arc::new(FixedClock(NaiveDate::from_ymd_opt(2026, 2, 18).unwrap())),
            logger: mock_logger(),
        };

        assert!(matches!(
            use_case.execute().await.unwrap_err(),
            ProductError::Repository(RepositoryError::Persistence)
        ));
    }
}
