use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::geo_analyst::dtos::{AnalyzeRequestDto, MapOverviewQuery, PromptResponseDto};
use crate::features::geo_analyst::models::{LocationSummary, RecommendationResult, Region};
use crate::features::geo_analyst::services::GeoAnalystService;
use crate::shared::types::{ApiResponse, Meta};

/// Analyze the user's address and recommend insurance packages
///
/// `place_of_origin` is preferred over `address`. Registry data for the
/// province wins; otherwise `weather_data` drives the keyword rules.
#[utoipa::path(
    post,
    path = "/api/geo-analyst/analyze",
    request_body = AnalyzeRequestDto,
    responses(
        (status = 200, description = "Analysis result", body = ApiResponse<RecommendationResult>),
        (status = 400, description = "Missing or unresolvable address")
    ),
    tag = "geo-analyst"
)]
pub async fn analyze(
    State(service): State<Arc<GeoAnalystService>>,
    AppJson(dto): AppJson<AnalyzeRequestDto>,
) -> Result<Json<ApiResponse<RecommendationResult>>> {
    if dto.user_profile.effective_address().is_empty() {
        return Err(AppError::Validation(
            "user_profile.address or user_profile.place_of_origin is required".to_string(),
        ));
    }

    let result = service.analyze(&dto.user_profile, &dto.weather_data).await?;
    Ok(Json(ApiResponse::success(Some(result), None, None)))
}

/// Disaster overview for a region
#[utoipa::path(
    get,
    path = "/api/geo-analyst/map-overview",
    params(MapOverviewQuery),
    responses(
        (status = 200, description = "Map overview entries", body = ApiResponse<Vec<LocationSummary>>),
        (status = 400, description = "Unknown region")
    ),
    tag = "geo-analyst"
)]
pub async fn map_overview(
    State(service): State<Arc<GeoAnalystService>>,
    Query(query): Query<MapOverviewQuery>,
) -> Result<Json<ApiResponse<Vec<LocationSummary>>>> {
    let region: Region = query.region.parse().map_err(AppError::BadRequest)?;

    let overview = service.build_map_overview(region).await;
    let meta = Meta::from_len(overview.len());
    Ok(Json(ApiResponse::success(Some(overview), None, Some(meta))))
}

/// Render the geo analyst prompt for the given input
#[utoipa::path(
    post,
    path = "/api/geo-analyst/prompt",
    request_body = AnalyzeRequestDto,
    responses(
        (status = 200, description = "Rendered prompt", body = ApiResponse<PromptResponseDto>)
    ),
    tag = "geo-analyst"
)]
pub async fn render_prompt(
    State(service): State<Arc<GeoAnalystService>>,
    AppJson(dto): AppJson<AnalyzeRequestDto>,
) -> Result<Json<ApiResponse<PromptResponseDto>>> {
    let prompt = service
        .render_prompt(&dto)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(ApiResponse::success(
        Some(PromptResponseDto { prompt }),
        None,
        None,
    )))
}
