use serde::{Deserialize, Serialize};

use crate::features::disaster_locations::models::MarkerColor;
use crate::features::geo_analyst::models::RiskTier;
use crate::shared::text::title_case;

/// Disaster status code as stored in `disaster_locations.status`.
///
/// The weather ingestion process writes the four known codes; anything else
/// it introduces later is carried through as `Other` so it still renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DisasterStatus {
    Flood,
    StormWarning,
    HeavyRain,
    Stable,
    Other(String),
}

impl DisasterStatus {
    pub const FLOOD: &'static str = "ngập_lụt";
    pub const STORM_WARNING: &'static str = "cảnh_báo_bão";
    pub const HEAVY_RAIN: &'static str = "mưa_lớn";
    pub const STABLE: &'static str = "ổn_định";

    pub fn from_code(code: &str) -> Self {
        let normalized = code.trim().to_lowercase();
        match normalized.as_str() {
            Self::FLOOD | "flood" => DisasterStatus::Flood,
            Self::STORM_WARNING | "storm_warning" => DisasterStatus::StormWarning,
            Self::HEAVY_RAIN | "heavy_rain" => DisasterStatus::HeavyRain,
            Self::STABLE | "stable" | "" => DisasterStatus::Stable,
            _ => DisasterStatus::Other(normalized),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            DisasterStatus::Flood => Self::FLOOD,
            DisasterStatus::StormWarning => Self::STORM_WARNING,
            DisasterStatus::HeavyRain => Self::HEAVY_RAIN,
            DisasterStatus::Stable => Self::STABLE,
            DisasterStatus::Other(code) => code,
        }
    }

    /// Human readable label: underscores become spaces, then title case.
    /// `ngập_lụt` -> `Ngập Lụt`, `lũ-quét` -> `Lũ-Quét`.
    pub fn humanize(&self) -> String {
        title_case(&self.code().replace('_', " "))
    }

    /// Severity the ingestion process assigns to a freshly classified status
    pub fn default_severity(&self) -> RiskTier {
        match self {
            DisasterStatus::Flood | DisasterStatus::StormWarning => RiskTier::High,
            DisasterStatus::HeavyRain => RiskTier::Medium,
            DisasterStatus::Stable | DisasterStatus::Other(_) => RiskTier::Low,
        }
    }

    /// Marker colour the ingestion process assigns to a freshly classified status
    pub fn default_marker_color(&self) -> MarkerColor {
        match self {
            DisasterStatus::Flood | DisasterStatus::StormWarning => MarkerColor::Red,
            DisasterStatus::HeavyRain => MarkerColor::Blue,
            DisasterStatus::Stable | DisasterStatus::Other(_) => MarkerColor::Green,
        }
    }
}

impl From<String> for DisasterStatus {
    fn from(code: String) -> Self {
        Self::from_code(&code)
    }
}

impl From<DisasterStatus> for String {
    fn from(status: DisasterStatus) -> Self {
        status.code().to_string()
    }
}

impl std::fmt::Display for DisasterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_round_trip() {
        for code in ["ngập_lụt", "cảnh_báo_bão", "mưa_lớn", "ổn_định"] {
            let status = DisasterStatus::from_code(code);
            assert!(!matches!(status, DisasterStatus::Other(_)), "{code}");
            assert_eq!(status.code(), code);
        }
    }

    #[test]
    fn test_english_aliases() {
        assert_eq!(DisasterStatus::from_code("flood"), DisasterStatus::Flood);
        assert_eq!(
            DisasterStatus::from_code("Storm_Warning"),
            DisasterStatus::StormWarning
        );
        assert_eq!(DisasterStatus::from_code(""), DisasterStatus::Stable);
    }

    #[test]
    fn test_humanize() {
        assert_eq!(DisasterStatus::Flood.humanize(), "Ngập Lụt");
        assert_eq!(DisasterStatus::StormWarning.humanize(), "Cảnh Báo Bão");
        assert_eq!(DisasterStatus::Stable.humanize(), "Ổn Định");
        assert_eq!(
            DisasterStatus::from_code("sạt_lở").humanize(),
            "Sạt Lở"
        );
        assert_eq!(
            DisasterStatus::from_code("lũ-quét_vùng_núi").humanize(),
            "Lũ-Quét Vùng Núi"
        );
    }

    #[test]
    fn test_unknown_status_is_kept() {
        let status = DisasterStatus::from_code("sạt_lở");
        assert_eq!(status, DisasterStatus::Other("sạt_lở".to_string()));
        assert_eq!(status.default_marker_color(), MarkerColor::Green);
        assert_eq!(status.default_severity(), RiskTier::Low);
    }

    #[test]
    fn test_ingestion_defaults() {
        assert_eq!(DisasterStatus::Flood.default_severity(), RiskTier::High);
        assert_eq!(DisasterStatus::HeavyRain.default_marker_color(), MarkerColor::Blue);
        assert_eq!(DisasterStatus::StormWarning.default_marker_color(), MarkerColor::Red);
    }
}
