use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryJson;
use persistence::store::{JsonStore, StoreConfig};

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_alerts::GetExpiryAlertsUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_stats::GetDashboardStatsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::clock::{Clock, SystemClock};
use business::domain::product::repository::ProductRepository;

use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;
use crate::api::stats::routes::DashboardApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub dashboard_api: DashboardApi,
}

impl DependencyContainer {
    /// Opens the JSON inventory at `store` and wires it with the system clock.
    pub async fn new(store: &StoreConfig) -> anyhow::Result<Self> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let repository =
            ProductRepositoryJson::open(JsonStore::new(store), clock.today()).await;
        Ok(Self::build(Arc::new(repository), clock))
    }

    pub fn build(repository: Arc<dyn ProductRepository>, clock: Arc<dyn Clock>) -> Self {
        let logger = Arc::new(TracingLogger::new("products"));
        let dashboard_logger = Arc::new(TracingLogger::new("dashboard"));

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: repository.clone(),
            clock: clock.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: repository.clone(),
            clock: clock.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: repository.clone(),
            clock: clock.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: repository.clone(),
            clock: clock.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: repository.clone(),
            logger,
        });

        // Dashboard use cases
        let stats_use_case = Arc::new(GetDashboardStatsUseCaseImpl {
            repository: repository.clone(),
            clock: clock.clone(),
            logger: dashboard_logger.clone(),
        });
        let alerts_use_case = Arc::new(GetExpiryAlertsUseCaseImpl {
            repository,
            clock,
            logger: dashboard_logger,
        });

        let product_api = ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        );
        let dashboard_api = DashboardApi::new(stats_use_case.clone(), alerts_use_case);
        let health_api = HealthApi::new(stats_use_case);

        Self {
            health_api,
            product_api,
            dashboard_api,
        }
    }
}
