use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::disaster_locations::dtos::{
    CreateDisasterLocationDto, DisasterLocationSearchQuery, UpdateDisasterLocationDto,
};
use crate::features::disaster_locations::models::{
    encode_package_ids, DisasterLocation, DisasterStatus, DISASTER_LOCATION_COLUMNS,
};
use crate::features::disaster_locations::services::{DisasterRegistry, RegistryError};
use crate::features::geo_analyst::models::Region;

/// Convert database error to a more specific AppError
fn handle_db_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        // Unique constraint violation
        if db_err.code() == Some(std::borrow::Cow::Borrowed("23505")) {
            return AppError::Conflict(
                "A disaster location with this id already exists.".to_string(),
            );
        }
    }

    AppError::Database(e)
}

/// `%input%` for ILIKE, with the input's own wildcards matched literally
fn contains_pattern(input: &str) -> String {
    let mut pattern = String::with_capacity(input.len() + 2);
    pattern.push('%');
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn parse_region(raw: &str) -> Result<Region> {
    raw.parse::<Region>().map_err(AppError::BadRequest)
}

/// Postgres-backed disaster registry
pub struct DisasterLocationService {
    pool: PgPool,
}

impl DisasterLocationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All rows in registry order
    pub async fn list_locations(&self) -> Result<Vec<DisasterLocation>> {
        let sql = format!(
            "SELECT {} FROM disaster_locations ORDER BY seq ASC",
            DISASTER_LOCATION_COLUMNS
        );

        sqlx::query_as::<_, DisasterLocation>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch disaster locations: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Rows of one region. `region` accepts short, long or English forms.
    pub async fn list_by_region(&self, region: &str) -> Result<Vec<DisasterLocation>> {
        let region = parse_region(region)?;

        // Rows may carry any spelling of the region, so match after parsing
        let locations = self
            .list_locations()
            .await?
            .into_iter()
            .filter(|location| location.parsed_region() == Some(region))
            .collect();

        Ok(locations)
    }

    pub async fn search(&self, query: &DisasterLocationSearchQuery) -> Result<Vec<DisasterLocation>> {
        let province_pattern = query
            .province
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(contains_pattern);
        let status = query
            .status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| DisasterStatus::from_code(s).code().to_string());

        let sql = format!(
            r#"
            SELECT {}
            FROM disaster_locations
            WHERE ($1::text IS NULL OR province ILIKE $1)
              AND ($2::text IS NULL OR status = $2)
            ORDER BY seq ASC
            "#,
            DISASTER_LOCATION_COLUMNS
        );

        sqlx::query_as::<_, DisasterLocation>(&sql)
            .bind(province_pattern)
            .bind(status)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to search disaster locations: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn get_by_id(&self, id: &str) -> Result<DisasterLocation> {
        let sql = format!(
            "SELECT {} FROM disaster_locations WHERE id = $1",
            DISASTER_LOCATION_COLUMNS
        );

        sqlx::query_as::<_, DisasterLocation>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch disaster location {}: {:?}", id, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Disaster location '{}' not found", id)))
    }

    pub async fn create(&self, dto: CreateDisasterLocationDto) -> Result<DisasterLocation> {
        let region = parse_region(&dto.region)?;
        let status = DisasterStatus::from_code(dto.status.as_deref().unwrap_or_default());
        let marker_color = dto
            .marker_color
            .unwrap_or_else(|| status.default_marker_color());
        let severity = dto.severity.unwrap_or_else(|| status.default_severity());

        let sql = format!(
            r#"
            INSERT INTO disaster_locations (
                id, province, region, latitude, longitude, status, marker_color,
                severity, advice, detail, recommended_packages, weather_info
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {}
            "#,
            DISASTER_LOCATION_COLUMNS
        );

        let location = sqlx::query_as::<_, DisasterLocation>(&sql)
            .bind(&dto.id)
            .bind(dto.province.trim())
            .bind(region.short_form())
            .bind(dto.latitude)
            .bind(dto.longitude)
            .bind(status.code())
            .bind(marker_color.as_str())
            .bind(severity.label())
            .bind(&dto.advice)
            .bind(&dto.detail)
            .bind(encode_package_ids(&dto.recommended_packages))
            .bind(&dto.weather_info)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create disaster location {}: {:?}", dto.id, e);
                handle_db_error(e)
            })?;

        tracing::info!(
            "Disaster location created: {} ({})",
            location.id,
            location.province
        );
        Ok(location)
    }

    /// Applies the provided fields and bumps `last_updated`
    pub async fn update(&self, id: &str, dto: UpdateDisasterLocationDto) -> Result<DisasterLocation> {
        let region = dto.region.as_deref().map(parse_region).transpose()?;
        let status = dto
            .status
            .as_deref()
            .map(|s| DisasterStatus::from_code(s).code().to_string());
        let recommended_packages = dto
            .recommended_packages
            .as_deref()
            .map(encode_package_ids);

        let sql = format!(
            r#"
            UPDATE disaster_locations SET
                province = COALESCE($2, province),
                region = COALESCE($3, region),
                latitude = COALESCE($4, latitude),
                longitude = COALESCE($5, longitude),
                status = COALESCE($6, status),
                marker_color = COALESCE($7, marker_color),
                severity = COALESCE($8, severity),
                advice = COALESCE($9, advice),
                detail = COALESCE($10, detail),
                recommended_packages = COALESCE($11, recommended_packages),
                weather_info = COALESCE($12, weather_info),
                last_updated = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            DISASTER_LOCATION_COLUMNS
        );

        let location = sqlx::query_as::<_, DisasterLocation>(&sql)
            .bind(id)
            .bind(dto.province.as_deref().map(str::trim))
            .bind(region.map(|r| r.short_form()))
            .bind(dto.latitude)
            .bind(dto.longitude)
            .bind(status)
            .bind(dto.marker_color.map(|c| c.as_str()))
            .bind(dto.severity.map(|s| s.label()))
            .bind(&dto.advice)
            .bind(&dto.detail)
            .bind(recommended_packages)
            .bind(&dto.weather_info)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update disaster location {}: {:?}", id, e);
                handle_db_error(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Disaster location '{}' not found", id)))?;

        tracing::info!("Disaster location updated: {}", location.id);
        Ok(location)
    }
}

#[async_trait]
impl DisasterRegistry for DisasterLocationService {
    async fn get(&self, province: &str) -> std::result::Result<Option<DisasterLocation>, RegistryError> {
        let sql = format!(
            "SELECT {} FROM disaster_locations WHERE province = $1 ORDER BY seq ASC LIMIT 1",
            DISASTER_LOCATION_COLUMNS
        );

        let location = sqlx::query_as::<_, DisasterLocation>(&sql)
            .bind(province)
            .fetch_optional(&self.pool)
            .await?;

        Ok(location)
    }

    async fn list_all(&self) -> std::result::Result<Vec<DisasterLocation>, RegistryError> {
        let sql = format!(
            "SELECT {} FROM disaster_locations ORDER BY seq ASC",
            DISASTER_LOCATION_COLUMNS
        );

        let locations = sqlx::query_as::<_, DisasterLocation>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(locations)
    }
}
