use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::features::disaster_locations::models::{DisasterStatus, MarkerColor};
use crate::features::geo_analyst::models::Region;

/// Column list shared by every `disaster_locations` query
pub const DISASTER_LOCATION_COLUMNS: &str = "id, province, region, latitude, longitude, \
     status, marker_color, severity, advice, detail, recommended_packages, weather_info, \
     last_updated, created_at";

/// One monitored province in the disaster registry.
///
/// Rows are created by seeding and overwritten in place by the weather
/// ingestion process; the analyst only reads them.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DisasterLocation {
    pub id: String,
    pub province: String,
    /// Short (`Bắc`), long (`Miền Bắc`) or English form, as written upstream
    pub region: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: String,
    pub marker_color: String,
    pub severity: String,
    pub advice: Option<String>,
    pub detail: Option<String>,
    /// JSON-encoded list of package codes
    pub recommended_packages: Option<String>,
    pub weather_info: Option<serde_json::Value>,
    pub last_updated: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl DisasterLocation {
    pub fn disaster_status(&self) -> DisasterStatus {
        DisasterStatus::from_code(&self.status)
    }

    pub fn marker(&self) -> MarkerColor {
        MarkerColor::from_stored(&self.marker_color)
    }

    pub fn parsed_region(&self) -> Option<Region> {
        self.region.parse().ok()
    }

    /// Region label for display: the long form when recognised, the raw value otherwise
    pub fn region_label(&self) -> String {
        self.parsed_region()
            .map(|r| r.label().to_string())
            .unwrap_or_else(|| self.region.clone())
    }

    /// Decoded `recommended_packages`; malformed content yields an empty list
    pub fn recommended_package_ids(&self) -> Vec<String> {
        decode_package_ids(self.recommended_packages.as_deref())
    }
}

/// Decodes a persisted package-id list.
///
/// Accepts a JSON array of strings, or a JSON string wrapping such an array
/// (double-encoded rows). Non-string entries are dropped. Anything else is
/// logged and treated as an empty list; this never fails.
pub fn decode_package_ids(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Vec::new();
    };

    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(code) => Some(code),
                other => {
                    tracing::warn!("Skipping non-string package id: {}", other);
                    None
                }
            })
            .collect(),
        Ok(serde_json::Value::String(inner)) if inner.trim_start().starts_with('[') => {
            decode_package_ids(Some(&inner))
        }
        Ok(other) => {
            tracing::warn!("Malformed package list (not an array): {}", other);
            Vec::new()
        }
        Err(e) => {
            tracing::warn!("Malformed package list '{}': {}", raw, e);
            Vec::new()
        }
    }
}

/// Encodes package codes the way they are persisted
pub fn encode_package_ids(ids: &[String]) -> String {
    serde_json::Value::from(ids.to_vec()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_json_array() {
        let ids = decode_package_ids(Some(r#"["bh_suc_khoe", "bh_xe_co_gioi"]"#));
        assert_eq!(ids, vec!["bh_suc_khoe", "bh_xe_co_gioi"]);
    }

    #[test]
    fn test_decode_double_encoded() {
        let ids = decode_package_ids(Some(r#""[\"bh_du_lich\"]""#));
        assert_eq!(ids, vec!["bh_du_lich"]);
    }

    #[test]
    fn test_decode_malformed_is_empty() {
        assert!(decode_package_ids(Some("[bh_suc_khoe")).is_empty());
        assert!(decode_package_ids(Some("{\"a\": 1}")).is_empty());
        assert!(decode_package_ids(Some("\"plain text\"")).is_empty());
        assert!(decode_package_ids(Some("   ")).is_empty());
        assert!(decode_package_ids(None).is_empty());
    }

    #[test]
    fn test_decode_skips_non_strings() {
        let ids = decode_package_ids(Some(r#"["bh_tai_san", 42, null]"#));
        assert_eq!(ids, vec!["bh_tai_san"]);
    }

    #[test]
    fn test_encode_then_decode_keeps_every_id() {
        let ids = vec![
            "bh_thien_tai_mien_trung".to_string(),
            "bh_xe_ngap_nuoc".to_string(),
            "bh_nha_cua".to_string(),
        ];
        assert_eq!(decode_package_ids(Some(&encode_package_ids(&ids))), ids);
    }
}
