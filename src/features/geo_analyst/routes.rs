use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::geo_analyst::handlers;
use crate::features::geo_analyst::services::GeoAnalystService;

/// Create routes for the geo analyst feature
pub fn routes(service: Arc<GeoAnalystService>) -> Router {
    Router::new()
        .route("/api/geo-analyst/analyze", post(handlers::analyze))
        .route("/api/geo-analyst/map-overview", get(handlers::map_overview))
        .route("/api/geo-analyst/prompt", post(handlers::render_prompt))
        .with_state(service)
}
