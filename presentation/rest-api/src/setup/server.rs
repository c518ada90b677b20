use poem::{
    EndpointExt, Route, Server as PoemServer,
    endpoint::StaticFilesEndpoint,
    listener::TcpListener,
    middleware::{SizeLimit, Tracing},
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.admin_product_api,
                container.storefront_api,
                container.category_api,
            ),
            "Catalog Backend API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let media = StaticFilesEndpoint::new(&config.storage.directory);
        let app = Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .nest(&config.storage.public_path, media)
            .with(config.cors)
            .with(SizeLimit::new(config.server.max_request_bytes))
            .with(Tracing);
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!(
            "Serving images from {} at {}",
            config.storage.directory,
            config.storage.public_path
        );
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
