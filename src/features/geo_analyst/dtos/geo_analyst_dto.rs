use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::geo_analyst::models::{UserProfile, WeatherData};

/// Request DTO for an analysis or prompt rendering
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequestDto {
    pub user_profile: UserProfile,
    /// Only used when the registry has no actionable data for the province
    #[serde(default)]
    pub weather_data: WeatherData,
}

/// Query parameters for the map overview
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct MapOverviewQuery {
    /// `Bắc`, `Trung`, `Nam`, the `Miền ...` forms, or North/Central/South
    #[param(example = "Trung")]
    pub region: String,
}

/// Rendered prompt for the external document model
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PromptResponseDto {
    pub prompt: String,
}
