use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::disaster_locations::models::{DisasterLocation, MarkerColor};

/// One recommended insurance package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recommendation {
    /// Display name
    pub package: String,
    /// URL slug of the package page
    pub package_id: String,
    /// Catalog code
    pub code: String,
    /// Priority score 0-100
    pub percent: u8,
    pub reason: String,
}

/// Registry row as attached to an analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DisasterInfo {
    pub province: String,
    pub region: String,
    pub status: String,
    pub severity: String,
    pub marker_color: String,
    pub advice: Option<String>,
    pub detail: Option<String>,
}

impl From<&DisasterLocation> for DisasterInfo {
    fn from(location: &DisasterLocation) -> Self {
        Self {
            province: location.province.clone(),
            region: location.region.clone(),
            status: location.status.clone(),
            severity: location.severity.clone(),
            marker_color: location.marker_color.clone(),
            advice: location.advice.clone(),
            detail: location.detail.clone(),
        }
    }
}

/// Entry of the map overview shown beside the user's own marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationSummary {
    pub province: String,
    pub region: String,
    pub weather: String,
    pub marker_color: MarkerColor,
    pub risk: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub detail: Option<String>,
}

/// The user's own map marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserMarker {
    pub province: String,
    pub region: String,
    pub weather: String,
    pub risk: String,
    pub marker_color: MarkerColor,
}

/// Result of a geo-risk analysis. Built fresh on every call, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendationResult {
    pub user_region: String,
    pub user_province: String,
    /// `"<condition> - <alert>"`, or just the condition when there is no alert
    pub weather_status: String,
    pub risk_level: String,
    pub marker_color: MarkerColor,
    pub recommended_packages: Vec<Recommendation>,
    pub map_overview: Vec<LocationSummary>,
    /// RFC 3339 timestamp
    pub analysis_time: String,
    pub user_marker: UserMarker,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disaster_info: Option<DisasterInfo>,
}
