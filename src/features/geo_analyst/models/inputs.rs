use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Person fields extracted from an identity document
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    /// Quê quán; preferred over `address` when present
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub document_type: Option<String>,
}

impl UserProfile {
    /// The address the analysis runs on: place of origin first, then current address
    pub fn effective_address(&self) -> &str {
        [&self.place_of_origin, &self.address]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .map(str::trim)
            .find(|value| !value.is_empty())
            .unwrap_or("")
    }
}

/// Ambient weather supplied by the caller, used only when the registry has nothing actionable
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct WeatherData {
    #[serde(default)]
    pub source: Option<String>,
    /// Passed through untouched; suppliers send both `"28°C"` and bare numbers
    #[serde(default)]
    pub temperature: Option<serde_json::Value>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub alert: Option<String>,
}

impl WeatherData {
    pub const DEFAULT_CONDITION: &'static str = "Ổn định";

    pub fn condition_or_default(&self) -> &str {
        self.condition
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(Self::DEFAULT_CONDITION)
    }

    pub fn alert_or_empty(&self) -> &str {
        self.alert.as_deref().map(str::trim).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_of_origin_preferred() {
        let profile = UserProfile {
            address: Some("123 Lê Lợi, TP.HCM".to_string()),
            place_of_origin: Some("Thạch Hà, Hà Tĩnh".to_string()),
            ..Default::default()
        };
        assert_eq!(profile.effective_address(), "Thạch Hà, Hà Tĩnh");
    }

    #[test]
    fn test_blank_place_of_origin_falls_back_to_address() {
        let profile = UserProfile {
            address: Some("Hải Châu, Đà Nẵng".to_string()),
            place_of_origin: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(profile.effective_address(), "Hải Châu, Đà Nẵng");
        assert_eq!(UserProfile::default().effective_address(), "");
    }

    #[test]
    fn test_weather_defaults() {
        let weather = WeatherData::default();
        assert_eq!(weather.condition_or_default(), "Ổn định");
        assert_eq!(weather.alert_or_empty(), "");

        let weather = WeatherData {
            condition: Some("".to_string()),
            alert: Some("Cảnh báo bão".to_string()),
            ..Default::default()
        };
        assert_eq!(weather.condition_or_default(), "Ổn định");
        assert_eq!(weather.alert_or_empty(), "Cảnh báo bão");
    }

    #[test]
    fn test_weather_temperature_accepts_text_and_numbers() {
        let weather: WeatherData = serde_json::from_str(
            r#"{"source": "OpenWeather", "temperature": "28°C", "condition": "mưa lớn", "alert": "nguy cơ ngập lụt"}"#,
        )
        .unwrap();
        assert_eq!(weather.temperature, Some(serde_json::json!("28°C")));
        assert_eq!(weather.condition_or_default(), "mưa lớn");

        let weather: WeatherData = serde_json::from_str(r#"{"temperature": 31.5}"#).unwrap();
        assert_eq!(weather.temperature, Some(serde_json::json!(31.5)));
    }
}
