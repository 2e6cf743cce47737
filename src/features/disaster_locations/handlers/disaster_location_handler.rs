use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::disaster_locations::dtos::{
    CreateDisasterLocationDto, DisasterLocationResponseDto, DisasterLocationSearchQuery,
    UpdateDisasterLocationDto,
};
use crate::features::disaster_locations::models::DisasterLocation;
use crate::features::disaster_locations::services::DisasterLocationService;
use crate::shared::types::{ApiResponse, Meta};

fn list_response(locations: Vec<DisasterLocation>) -> Json<ApiResponse<Vec<DisasterLocationResponseDto>>> {
    let dtos: Vec<DisasterLocationResponseDto> = locations.into_iter().map(Into::into).collect();
    let meta = Meta::from_len(dtos.len());
    Json(ApiResponse::success(Some(dtos), None, Some(meta)))
}

/// List every monitored province
#[utoipa::path(
    get,
    path = "/api/disaster-locations",
    responses(
        (status = 200, description = "All registry rows", body = ApiResponse<Vec<DisasterLocationResponseDto>>)
    ),
    tag = "disaster-locations"
)]
pub async fn list_disaster_locations(
    State(service): State<Arc<DisasterLocationService>>,
) -> Result<Json<ApiResponse<Vec<DisasterLocationResponseDto>>>> {
    let locations = service.list_locations().await?;
    Ok(list_response(locations))
}

/// List monitored provinces of one region
#[utoipa::path(
    get,
    path = "/api/disaster-locations/region/{region}",
    params(
        ("region" = String, Path, description = "Bắc, Trung, Nam (or Miền Bắc, North, ...)")
    ),
    responses(
        (status = 200, description = "Registry rows of the region", body = ApiResponse<Vec<DisasterLocationResponseDto>>),
        (status = 400, description = "Unknown region")
    ),
    tag = "disaster-locations"
)]
pub async fn list_by_region(
    State(service): State<Arc<DisasterLocationService>>,
    Path(region): Path<String>,
) -> Result<Json<ApiResponse<Vec<DisasterLocationResponseDto>>>> {
    let locations = service.list_by_region(&region).await?;
    Ok(list_response(locations))
}

/// Search by province name and/or status code
#[utoipa::path(
    get,
    path = "/api/disaster-locations/search",
    params(DisasterLocationSearchQuery),
    responses(
        (status = 200, description = "Matching registry rows", body = ApiResponse<Vec<DisasterLocationResponseDto>>)
    ),
    tag = "disaster-locations"
)]
pub async fn search_disaster_locations(
    State(service): State<Arc<DisasterLocationService>>,
    Query(query): Query<DisasterLocationSearchQuery>,
) -> Result<Json<ApiResponse<Vec<DisasterLocationResponseDto>>>> {
    let locations = service.search(&query).await?;
    Ok(list_response(locations))
}

/// Get one registry row by id
#[utoipa::path(
    get,
    path = "/api/disaster-locations/{id}",
    params(
        ("id" = String, Path, description = "Location slug, e.g. ha-tinh")
    ),
    responses(
        (status = 200, description = "Registry row", body = ApiResponse<DisasterLocationResponseDto>),
        (status = 404, description = "Location not found")
    ),
    tag = "disaster-locations"
)]
pub async fn get_disaster_location(
    State(service): State<Arc<DisasterLocationService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DisasterLocationResponseDto>>> {
    let location = service.get_by_id(&id).await?;
    Ok(Json(ApiResponse::success(Some(location.into()), None, None)))
}

/// Add a monitored province
#[utoipa::path(
    post,
    path = "/api/disaster-locations",
    request_body = CreateDisasterLocationDto,
    responses(
        (status = 201, description = "Location created", body = ApiResponse<DisasterLocationResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Id already exists")
    ),
    tag = "disaster-locations",
    security(("admin_basic_auth" = []))
)]
pub async fn create_disaster_location(
    State(service): State<Arc<DisasterLocationService>>,
    AppJson(dto): AppJson<CreateDisasterLocationDto>,
) -> Result<(StatusCode, Json<ApiResponse<DisasterLocationResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let location = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(location.into()),
            Some("Disaster location created successfully".to_string()),
            None,
        )),
    ))
}

/// Update a registry row
#[utoipa::path(
    put,
    path = "/api/disaster-locations/{id}",
    params(
        ("id" = String, Path, description = "Location slug, e.g. ha-tinh")
    ),
    request_body = UpdateDisasterLocationDto,
    responses(
        (status = 200, description = "Location updated", body = ApiResponse<DisasterLocationResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Location not found")
    ),
    tag = "disaster-locations",
    security(("admin_basic_auth" = []))
)]
pub async fn update_disaster_location(
    State(service): State<Arc<DisasterLocationService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateDisasterLocationDto>,
) -> Result<Json<ApiResponse<DisasterLocationResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let location = service.update(&id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(location.into()),
        Some("Disaster location updated successfully".to_string()),
        None,
    )))
}
