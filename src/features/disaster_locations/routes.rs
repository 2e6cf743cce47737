use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::core::middleware::basic_auth_middleware;
use crate::features::disaster_locations::handlers;
use crate::features::disaster_locations::services::DisasterLocationService;

/// Public read routes for the disaster registry
pub fn routes(service: Arc<DisasterLocationService>) -> Router {
    Router::new()
        .route(
            "/api/disaster-locations",
            get(handlers::list_disaster_locations),
        )
        // Static segments must come before {id}
        .route(
            "/api/disaster-locations/search",
            get(handlers::search_disaster_locations),
        )
        .route(
            "/api/disaster-locations/region/{region}",
            get(handlers::list_by_region),
        )
        .route(
            "/api/disaster-locations/{id}",
            get(handlers::get_disaster_location),
        )
        .with_state(service)
}

/// Write routes, guarded by HTTP basic auth with `credentials` ("user:pass")
pub fn admin_routes(service: Arc<DisasterLocationService>, credentials: String) -> Router {
    let credentials = Arc::new(credentials);

    Router::new()
        .route(
            "/api/disaster-locations",
            post(handlers::create_disaster_location),
        )
        .route(
            "/api/disaster-locations/{id}",
            put(handlers::update_disaster_location),
        )
        .layer(middleware::from_fn(basic_auth_middleware(
            credentials,
            "Disaster Registry Admin",
        )))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;
    use sqlx::postgres::PgPoolOptions;

    // Never connects; requests rejected by the auth layer do not reach the pool
    fn lazy_service() -> Arc<DisasterLocationService> {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unused")
            .unwrap();
        Arc::new(DisasterLocationService::new(pool))
    }

    #[tokio::test]
    async fn test_admin_routes_require_basic_auth() {
        let server =
            TestServer::new(admin_routes(lazy_service(), "admin:secret".to_string())).unwrap();

        let response = server
            .post("/api/disaster-locations")
            .json(&json!({ "id": "da-nang", "province": "Đà Nẵng", "region": "Trung" }))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let response = server
            .put("/api/disaster-locations/da-nang")
            .json(&json!({ "status": "mưa_lớn" }))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }
}
