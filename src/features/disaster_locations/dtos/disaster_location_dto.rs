use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::disaster_locations::models::{DisasterLocation, MarkerColor};
use crate::features::geo_analyst::models::RiskTier;

/// Response DTO for a disaster registry row
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DisasterLocationResponseDto {
    pub id: String,
    pub province: String,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Status code, e.g. `ngập_lụt`
    pub status: String,
    /// Human readable status, e.g. `Ngập Lụt`
    pub status_label: String,
    pub marker_color: MarkerColor,
    pub severity: String,
    pub advice: Option<String>,
    pub detail: Option<String>,
    /// Package codes
    pub recommended_packages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_info: Option<serde_json::Value>,
    pub last_updated: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<DisasterLocation> for DisasterLocationResponseDto {
    fn from(location: DisasterLocation) -> Self {
        let status_label = location.disaster_status().humanize();
        let marker_color = location.marker();
        let recommended_packages = location.recommended_package_ids();
        let region = location.region_label();

        Self {
            id: location.id,
            province: location.province,
            region,
            latitude: location.latitude,
            longitude: location.longitude,
            status: location.status,
            status_label,
            marker_color,
            severity: location.severity,
            advice: location.advice,
            detail: location.detail,
            recommended_packages,
            weather_info: location.weather_info,
            last_updated: location.last_updated,
            created_at: location.created_at,
        }
    }
}

/// Query parameters for searching the registry
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct DisasterLocationSearchQuery {
    /// Case-insensitive partial match on the province name
    #[param(example = "quảng")]
    pub province: Option<String>,
    /// Exact status code
    #[param(example = "ngập_lụt")]
    pub status: Option<String>,
}

/// Request DTO for adding a monitored province
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateDisasterLocationDto {
    #[validate(
        length(min = 1, max = 64, message = "Id must be 1-64 characters"),
        regex(
            path = "*crate::shared::validation::SLUG_REGEX",
            message = "Id must be a lowercase slug, e.g. ha-tinh"
        )
    )]
    #[schema(example = "ha-tinh")]
    pub id: String,

    #[validate(length(min = 1, max = 128, message = "Province must be 1-128 characters"))]
    #[schema(example = "Hà Tĩnh")]
    pub province: String,

    /// `Bắc`, `Miền Bắc` or `North` (and likewise for the other regions)
    #[schema(example = "Trung")]
    pub region: String,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be within -90..90"))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be within -180..180"))]
    pub longitude: Option<f64>,

    /// Defaults to `ổn_định`
    #[validate(regex(
        path = "*crate::shared::validation::STATUS_CODE_REGEX",
        message = "Status must be lowercase words joined by underscores"
    ))]
    #[schema(example = "ngập_lụt")]
    pub status: Option<String>,

    /// Defaults to the colour implied by `status`
    pub marker_color: Option<MarkerColor>,

    /// Defaults to the severity implied by `status`
    #[schema(value_type = Option<String>, example = "Cao")]
    pub severity: Option<RiskTier>,

    #[validate(length(max = 1000, message = "Advice must not exceed 1000 characters"))]
    pub advice: Option<String>,

    #[validate(length(max = 2000, message = "Detail must not exceed 2000 characters"))]
    pub detail: Option<String>,

    #[validate(length(max = 10, message = "At most 10 recommended packages"))]
    #[serde(default)]
    pub recommended_packages: Vec<String>,

    pub weather_info: Option<serde_json::Value>,
}

/// Request DTO for updating a registry row; omitted fields are kept
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateDisasterLocationDto {
    #[validate(length(min = 1, max = 128, message = "Province must be 1-128 characters"))]
    pub province: Option<String>,

    pub region: Option<String>,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be within -90..90"))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be within -180..180"))]
    pub longitude: Option<f64>,

    #[validate(regex(
        path = "*crate::shared::validation::STATUS_CODE_REGEX",
        message = "Status must be lowercase words joined by underscores"
    ))]
    pub status: Option<String>,

    pub marker_color: Option<MarkerColor>,

    #[schema(value_type = Option<String>, example = "Trung bình")]
    pub severity: Option<RiskTier>,

    #[validate(length(max = 1000, message = "Advice must not exceed 1000 characters"))]
    pub advice: Option<String>,

    #[validate(length(max = 2000, message = "Detail must not exceed 2000 characters"))]
    pub detail: Option<String>,

    #[validate(length(max = 10, message = "At most 10 recommended packages"))]
    pub recommended_packages: Option<Vec<String>>,

    pub weather_info: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::location;

    fn create_dto() -> CreateDisasterLocationDto {
        CreateDisasterLocationDto {
            id: "ha-tinh".to_string(),
            province: "Hà Tĩnh".to_string(),
            region: "Trung".to_string(),
            latitude: Some(18.3559),
            longitude: Some(105.905),
            status: Some("ngập_lụt".to_string()),
            marker_color: None,
            severity: None,
            advice: None,
            detail: None,
            recommended_packages: vec!["bh_nha_cua".to_string()],
            weather_info: None,
        }
    }

    #[test]
    fn test_create_dto_valid() {
        assert!(create_dto().validate().is_ok());
    }

    #[test]
    fn test_create_dto_rejects_bad_slug() {
        let dto = CreateDisasterLocationDto {
            id: "Hà Tĩnh".to_string(),
            ..create_dto()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_dto_rejects_bad_coordinates() {
        let dto = CreateDisasterLocationDto {
            latitude: Some(123.0),
            ..create_dto()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_dto_rejects_bad_status() {
        let dto = CreateDisasterLocationDto {
            status: Some("Ngập lụt".to_string()),
            ..create_dto()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_response_dto_decodes_packages() {
        let mut row = location("tp-hcm", "TP Hồ Chí Minh", "Nam");
        row.recommended_packages = Some(r#"["bh_suc_khoe","bh_nha_o"]"#.to_string());
        row.marker_color = "GREEN".to_string();

        let dto = DisasterLocationResponseDto::from(row);
        assert_eq!(dto.region, "Miền Nam");
        assert_eq!(dto.status_label, "Ổn Định");
        assert_eq!(dto.marker_color, MarkerColor::Green);
        assert_eq!(dto.recommended_packages, vec!["bh_suc_khoe", "bh_nha_o"]);
    }
}
