use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::api::{content_type::require_json, error::render_error};
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

/// Routes plus the content-type guard and JSON error rendering, without
/// network-facing middleware.
pub fn endpoint(container: DependencyContainer) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (
            container.health_api,
            container.index_api,
            container.recommendation_api,
        ),
        "Recommendations REST API Service",
        env!("CARGO_PKG_VERSION"),
    );
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/", api_service)
        .nest("/docs", ui)
        .nest("/openapi.json", spec)
        .around(require_json)
        .catch_all_error(render_error)
}

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = endpoint(container).with(config.cors).with(Tracing);

        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use business::testing::in_memory_repository::InMemoryRecommendationRepository;
    use poem::test::TestClient;

    use super::*;

    #[tokio::test]
    async fn should_publish_openapi_document() {
        let container =
            DependencyContainer::with_repository(Arc::new(InMemoryRecommendationRepository::new()));
        let cli = TestClient::new(endpoint(container));

        let response = cli.get("/openapi.json").send().await;

        response.assert_status_is_ok();
        let body = response.0.into_body().into_string().await.unwrap();
        assert!(body.contains("/recommendations/{id}/like"));
    }
}
