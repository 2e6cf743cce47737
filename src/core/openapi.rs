use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::disaster_locations::{
    dtos as disaster_dtos, handlers as disaster_handlers, models as disaster_models,
};
use crate::features::geo_analyst::{
    dtos as geo_dtos, handlers as geo_handlers, models as geo_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Geo analyst
        geo_handlers::analyze,
        geo_handlers::map_overview,
        geo_handlers::render_prompt,
        // Disaster registry (public)
        disaster_handlers::list_disaster_locations,
        disaster_handlers::list_by_region,
        disaster_handlers::search_disaster_locations,
        disaster_handlers::get_disaster_location,
        // Disaster registry (admin)
        disaster_handlers::create_disaster_location,
        disaster_handlers::update_disaster_location,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Geo analyst
            geo_models::Region,
            geo_models::UserProfile,
            geo_models::WeatherData,
            geo_models::Recommendation,
            geo_models::DisasterInfo,
            geo_models::LocationSummary,
            geo_models::UserMarker,
            geo_models::RecommendationResult,
            geo_dtos::AnalyzeRequestDto,
            geo_dtos::PromptResponseDto,
            ApiResponse<geo_models::RecommendationResult>,
            ApiResponse<Vec<geo_models::LocationSummary>>,
            ApiResponse<geo_dtos::PromptResponseDto>,
            // Disaster registry
            disaster_models::MarkerColor,
            disaster_dtos::DisasterLocationResponseDto,
            disaster_dtos::CreateDisasterLocationDto,
            disaster_dtos::UpdateDisasterLocationDto,
            ApiResponse<disaster_dtos::DisasterLocationResponseDto>,
            ApiResponse<Vec<disaster_dtos::DisasterLocationResponseDto>>,
        )
    ),
    tags(
        (name = "geo-analyst", description = "Address to region/province resolution and insurance recommendations"),
        (name = "disaster-locations", description = "Per-province disaster registry"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "VAM Geo-Analyst API",
        version = "0.1.0",
        description = "Geo-risk insurance recommendation API for VAM Insurance",
    )
)]
pub struct ApiDoc;

/// Adds the HTTP Basic scheme guarding the registry write endpoints
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "admin_basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_documents_both_features() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/geo-analyst/analyze"));
        assert!(doc.paths.paths.contains_key("/api/disaster-locations/{id}"));

        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("admin_basic_auth"));
        assert!(components.schemas.contains_key("RecommendationResult"));
    }

    #[test]
    fn test_swagger_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Title".to_string(),
            version: "9.9.9".to_string(),
            description: "Desc".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Title");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("Desc"));
    }
}
