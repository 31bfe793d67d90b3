use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;
use tracing::info;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    /// Mounts the API under `/api`, Swagger UI under `/docs` and the
    /// OpenAPI document under `/openapi.json`.
    pub fn routes(container: DependencyContainer, server_url: &str) -> Route {
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.product_api,
                container.dashboard_api,
            ),
            "Inventory API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("{}/api", server_url));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();

        Route::new()
            .nest("/api", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let server_url = format!("http://{}", addr);
        let app = Self::routes(container, &server_url)
            .with(config.cors)
            .with(Tracing);

        info!(address = %addr, "Server running at {}", server_url);
        info!("Swagger UI at {}/docs", server_url);
        info!("OpenAPI JSON at {}/openapi.json", server_url);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
