use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::core::config::GeoAnalystConfig;
use crate::core::error::AppError;
use crate::features::disaster_locations::models::{DisasterLocation, MarkerColor};
use crate::features::disaster_locations::services::DisasterRegistry;
use crate::features::geo_analyst::models::{
    DisasterInfo, LocationSummary, Recommendation, RecommendationResult, Region, RiskTier,
    UserMarker, UserProfile, WeatherData,
};
use crate::features::geo_analyst::services::{
    gazetteer, map_overview, package_catalog, risk_profile, rule_set,
};
use crate::shared::prompts::{self, TemplateError};

#[derive(Debug, Error)]
pub enum GeoAnalystError {
    #[error("Không thể xác định vùng miền từ địa chỉ: '{address}'")]
    UnresolvedAddress { address: String },
}

impl From<GeoAnalystError> for AppError {
    fn from(e: GeoAnalystError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

/// Weather, risk and recommendations for the resolved province
struct Assessment {
    weather_condition: String,
    alert: String,
    risk_level: String,
    marker_color: MarkerColor,
    recommendations: Vec<Recommendation>,
}

/// Fallback marker colour from weather keywords and risk tier
pub fn fallback_marker_color(weather_text: &str, risk: RiskTier) -> MarkerColor {
    let weather = weather_text.to_lowercase();

    if weather.contains("bão") || risk == RiskTier::VeryHigh {
        MarkerColor::Red
    } else if ["ngập", "lụt", "mưa lớn"].iter().any(|k| weather.contains(k)) {
        MarkerColor::Yellow
    } else if weather.contains("mưa") || weather.contains("cảnh báo") || risk == RiskTier::Medium
    {
        MarkerColor::Orange
    } else {
        MarkerColor::Green
    }
}

/// Maps a registry row's package codes through the catalog.
///
/// Unknown codes are skipped and at most `MAX_RECOMMENDATIONS` are kept, in
/// registry order. Reasons are prefixed with the province and its humanized
/// status.
pub fn map_registry_packages(location: &DisasterLocation) -> Vec<Recommendation> {
    let weather_condition = location.disaster_status().humanize();

    location
        .recommended_package_ids()
        .iter()
        .filter_map(|code| {
            let entry = package_catalog::get(code);
            if entry.is_none() {
                tracing::debug!("Package code '{}' not in catalog, skipping", code);
            }
            entry
        })
        .take(rule_set::MAX_RECOMMENDATIONS)
        .map(|entry| Recommendation {
            package: entry.name.to_string(),
            package_id: entry.package_id.to_string(),
            code: entry.code.to_string(),
            percent: entry.percent,
            reason: format!(
                "⚠️ {} - {}: {}",
                location.province, weather_condition, entry.reason
            ),
        })
        .collect()
}

/// Geo-risk resolver: address -> region/province -> registry or rule-set
/// recommendations plus a map overview.
pub struct GeoAnalystService {
    registry: Arc<dyn DisasterRegistry>,
    config: GeoAnalystConfig,
}

impl GeoAnalystService {
    pub fn new(registry: Arc<dyn DisasterRegistry>, config: GeoAnalystConfig) -> Self {
        Self { registry, config }
    }

    pub async fn analyze(
        &self,
        user_profile: &UserProfile,
        weather_data: &WeatherData,
    ) -> Result<RecommendationResult, GeoAnalystError> {
        self.analyze_at(user_profile, weather_data, Utc::now()).await
    }

    /// `analyze` with the analysis timestamp supplied by the caller
    pub async fn analyze_at(
        &self,
        user_profile: &UserProfile,
        weather_data: &WeatherData,
        now: DateTime<Utc>,
    ) -> Result<RecommendationResult, GeoAnalystError> {
        let address = user_profile.effective_address();
        let province = gazetteer::extract_province(address).ok_or_else(|| {
            tracing::info!("Unresolved address: '{}'", address);
            GeoAnalystError::UnresolvedAddress {
                address: address.to_string(),
            }
        })?;
        let region = province.region;

        let registry_row = self.lookup(province.name).await;
        let assessment = registry_row
            .as_ref()
            .and_then(Self::assess_from_registry)
            .unwrap_or_else(|| Self::assess_fallback(province.name, weather_data));

        let map_overview = self.build_map_overview(region).await;

        let weather_status = if assessment.alert.is_empty() {
            assessment.weather_condition.clone()
        } else {
            format!("{} - {}", assessment.weather_condition, assessment.alert)
        };

        Ok(RecommendationResult {
            user_region: region.label().to_string(),
            user_province: province.name.to_string(),
            weather_status,
            risk_level: assessment.risk_level.clone(),
            marker_color: assessment.marker_color,
            recommended_packages: assessment.recommendations,
            map_overview,
            analysis_time: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            user_marker: UserMarker {
                province: province.name.to_string(),
                region: region.label().to_string(),
                weather: assessment.weather_condition,
                risk: assessment.risk_level,
                marker_color: assessment.marker_color,
            },
            disaster_info: registry_row.as_ref().map(DisasterInfo::from),
        })
    }

    /// Registry row for the province; unavailability degrades to a miss
    async fn lookup(&self, province: &str) -> Option<DisasterLocation> {
        let normalized = gazetteer::normalize_province(province);

        match self.registry.get(&normalized).await {
            Ok(Some(location)) => {
                tracing::info!(
                    "Registry hit for {}: {} - {}",
                    normalized,
                    location.status,
                    location.severity
                );
                Some(location)
            }
            Ok(None) => {
                tracing::info!("No registry data for {}, using fallback", normalized);
                None
            }
            Err(e) => {
                tracing::warn!("Registry lookup failed for {}: {}", normalized, e);
                None
            }
        }
    }

    /// Registry data wins only when it yields at least one catalog package
    fn assess_from_registry(location: &DisasterLocation) -> Option<Assessment> {
        let recommendations = map_registry_packages(location);
        if recommendations.is_empty() {
            tracing::info!(
                "Registry row for {} maps to no packages, using fallback",
                location.province
            );
            return None;
        }

        Some(Assessment {
            weather_condition: location.disaster_status().humanize(),
            alert: format!("Mức độ: {}", location.severity),
            risk_level: location.severity.clone(),
            marker_color: location.marker(),
            recommendations,
        })
    }

    fn assess_fallback(province: &str, weather_data: &WeatherData) -> Assessment {
        let weather_condition = weather_data.condition_or_default().to_string();
        let alert = weather_data.alert_or_empty().to_string();
        let weather_text = format!("{} {}", weather_condition, alert);

        let risk = risk_profile::get_risk_level(province, &weather_text);
        if let Some(profile) = risk_profile::lookup(province) {
            tracing::debug!(
                "{} baseline {} (common: {})",
                province,
                profile.baseline,
                profile.common_disasters.join(", ")
            );
        }

        Assessment {
            recommendations: rule_set::recommend_insurance(&weather_condition, &alert, province),
            marker_color: fallback_marker_color(&weather_text, risk),
            risk_level: risk.label().to_string(),
            weather_condition,
            alert,
        }
    }

    /// Registry-backed overview for `region`, or sample data when the
    /// registry is empty or unavailable.
    pub async fn build_map_overview(&self, region: Region) -> Vec<LocationSummary> {
        match self.registry.list_all().await {
            Ok(locations) if !locations.is_empty() => {
                map_overview::from_registry(&locations, region, &self.config)
            }
            Ok(_) => {
                tracing::info!("Disaster registry is empty, using sample map overview");
                map_overview::fallback(region, &self.config)
            }
            Err(e) => {
                tracing::warn!("Failed to list disaster registry: {}", e);
                map_overview::fallback(region, &self.config)
            }
        }
    }

    /// Prompt the external document model would receive for this input
    pub fn render_prompt<T: Serialize>(&self, input: &T) -> Result<String, TemplateError> {
        prompts::render_geo_analyst_prompt(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{
        location, InMemoryDisasterRegistry, UnavailableDisasterRegistry,
    };

    fn service(locations: Vec<DisasterLocation>) -> GeoAnalystService {
        GeoAnalystService::new(
            Arc::new(InMemoryDisasterRegistry::new(locations)),
            GeoAnalystConfig::default(),
        )
    }

    fn profile(address: &str) -> UserProfile {
        UserProfile {
            address: Some(address.to_string()),
            ..Default::default()
        }
    }

    fn hcm_row(packages: &str) -> DisasterLocation {
        let mut row = location("tp-hcm", "TP Hồ Chí Minh", "Nam");
        row.recommended_packages = Some(packages.to_string());
        row
    }

    #[tokio::test]
    async fn test_fallback_high_risk_province() {
        let result = service(vec![])
            .analyze(&profile("Thạch Hà, Hà Tĩnh"), &WeatherData::default())
            .await
            .unwrap();

        assert_eq!(result.user_region, "Miền Trung");
        assert_eq!(result.user_province, "Hà Tĩnh");
        assert_eq!(result.risk_level, "Cao");
        assert_eq!(result.weather_status, "Ổn định");
        assert_eq!(result.marker_color, MarkerColor::Green);
        assert_eq!(result.recommended_packages.len(), 1);
        assert_eq!(result.recommended_packages[0].package, "Bảo hiểm thiên tai tổng hợp");
        assert_eq!(result.recommended_packages[0].percent, 92);
        assert!(result.disaster_info.is_none());
    }

    #[tokio::test]
    async fn test_registry_hit_with_alias_correction() {
        let result = service(vec![hcm_row(r#"["bh_suc_khoe"]"#)])
            .analyze(&profile("123 Lê Lợi, TP.HCM"), &WeatherData::default())
            .await
            .unwrap();

        assert_eq!(result.user_region, "Miền Nam");
        assert_eq!(result.user_province, "TP Hồ Chí Minh");
        assert_eq!(result.risk_level, "Thấp");
        assert_eq!(result.marker_color, MarkerColor::Green);
        assert_eq!(result.weather_status, "Ổn Định - Mức độ: Thấp");
        assert_eq!(result.recommended_packages.len(), 1);

        let package = &result.recommended_packages[0];
        assert_eq!(package.package, "Bảo Hiểm Sức Khỏe");
        assert_eq!(package.package_id, "health-basic");
        assert_eq!(package.percent, 80);
        assert!(package.reason.starts_with("⚠️ TP Hồ Chí Minh - Ổn Định: "));

        let info = result.disaster_info.unwrap();
        assert_eq!(info.province, "TP Hồ Chí Minh");
        assert_eq!(info.status, "ổn_định");
    }

    #[tokio::test]
    async fn test_unresolved_address() {
        let err = service(vec![])
            .analyze(&profile("221B Baker Street, London"), &WeatherData::default())
            .await
            .unwrap_err();

        let GeoAnalystError::UnresolvedAddress { address } = err;
        assert_eq!(address, "221B Baker Street, London");
    }

    #[tokio::test]
    async fn test_empty_package_list_uses_ambient_weather() {
        let mut row = hcm_row("[]");
        row.status = "ngập_lụt".to_string();
        row.severity = "Cao".to_string();
        row.marker_color = "red".to_string();

        let weather = WeatherData {
            condition: Some("Mưa lớn".to_string()),
            ..Default::default()
        };
        let result = service(vec![row])
            .analyze(&profile("Quận 1, TP.HCM"), &weather)
            .await
            .unwrap();

        // Ambient weather, not the registry status
        assert_eq!(result.weather_status, "Mưa lớn");
        assert_eq!(result.risk_level, "Thấp");
        assert_eq!(result.marker_color, MarkerColor::Yellow);
        assert_eq!(result.recommended_packages.len(), 1);
        assert_eq!(result.recommended_packages[0].package, "Bảo hiểm phương tiện ngập nước");
        // The row was still found
        assert!(result.disaster_info.is_some());
    }

    #[tokio::test]
    async fn test_unknown_codes_fall_through_to_rules() {
        let result = service(vec![hcm_row(r#"["bh_khong_ton_tai"]"#)])
            .analyze(&profile("Sài Gòn"), &WeatherData::default())
            .await
            .unwrap();
        assert!(result.recommended_packages.is_empty());
        assert_eq!(result.weather_status, "Ổn định");
    }

    #[tokio::test]
    async fn test_malformed_package_list_falls_back() {
        let result = service(vec![hcm_row("not json")])
            .analyze(&profile("Sài Gòn"), &WeatherData::default())
            .await
            .unwrap();
        assert_eq!(result.risk_level, "Thấp");
        assert!(result.recommended_packages.is_empty());
    }

    #[tokio::test]
    async fn test_registry_unavailable_still_resolves() {
        let service = GeoAnalystService::new(
            Arc::new(UnavailableDisasterRegistry),
            GeoAnalystConfig::default(),
        );
        let weather = WeatherData {
            condition: Some("Cảnh báo bão".to_string()),
            alert: Some("Bão số 5".to_string()),
            ..Default::default()
        };

        let result = service
            .analyze(&profile("Hải Châu, Đà Nẵng"), &weather)
            .await
            .unwrap();

        assert_eq!(result.weather_status, "Cảnh báo bão - Bão số 5");
        assert_eq!(result.risk_level, "Trung bình");
        assert_eq!(result.marker_color, MarkerColor::Red);
        // Sample overview: 8 Central provinces plus Hà Nội and TP Hồ Chí Minh
        assert_eq!(result.map_overview.len(), 10);
        assert!(result.disaster_info.is_none());
    }

    #[tokio::test]
    async fn test_analyze_is_idempotent() {
        let service = service(vec![
            hcm_row(r#"["bh_suc_khoe","bh_xe_co_gioi","bh_nha_o"]"#),
            location("can-tho", "Cần Thơ", "Nam"),
            location("hanoi", "Hà Nội", "Bắc"),
        ]);
        let user = profile("Phường Bến Nghé, Hồ Chí Minh");
        let weather = WeatherData::default();
        let now = Utc::now();

        let first = service.analyze_at(&user, &weather, now).await.unwrap();
        let second = service.analyze_at(&user, &weather, now).await.unwrap();
        assert_eq!(first, second);

        // Registry order is kept, highest percent is not forced first
        let codes: Vec<_> = first.recommended_packages.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["bh_suc_khoe", "bh_xe_co_gioi", "bh_nha_o"]);
    }

    #[tokio::test]
    async fn test_registry_packages_are_capped_in_registry_order() {
        let row = hcm_row(
            r#"["bh_xe_ngap_nuoc","bh_khong_ton_tai","bh_tai_san","bh_nha_o","bh_suc_khoe","bh_du_lich","bh_nong_nghiep","bh_than_the"]"#,
        );
        let result = service(vec![row])
            .analyze(&profile("Quận 3, TP.HCM"), &WeatherData::default())
            .await
            .unwrap();

        let codes: Vec<_> = result.recommended_packages.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(
            codes,
            vec!["bh_xe_ngap_nuoc", "bh_tai_san", "bh_nha_o", "bh_suc_khoe", "bh_du_lich"]
        );
    }

    #[tokio::test]
    async fn test_caps_hold_for_every_gazetteer_province() {
        let rows: Vec<DisasterLocation> = (0..30)
            .map(|i| {
                let region = ["Bắc", "Trung", "Nam"][i % 3];
                location(&format!("p-{i}"), &format!("Tỉnh {i}"), region)
            })
            .collect();
        let service = service(rows);
        let weather = WeatherData {
            condition: Some("bão ngập lụt sạt lở sương mù".to_string()),
            alert: Some("thời tiết khắc nghiệt".to_string()),
            ..Default::default()
        };

        for province in gazetteer::provinces() {
            let result = service
                .analyze(&profile(province.aliases[0]), &weather)
                .await
                .unwrap();
            assert!(result.recommended_packages.len() <= rule_set::MAX_RECOMMENDATIONS);
            assert!(result.map_overview.len() <= GeoAnalystConfig::MAX_OVERVIEW_ENTRIES);
            assert_eq!(result.user_province, province.name);
        }
    }

    #[tokio::test]
    async fn test_fallback_is_total_with_empty_inputs() {
        let service = service(vec![]);
        for province in gazetteer::provinces() {
            let result = service
                .analyze(&profile(province.aliases[0]), &WeatherData::default())
                .await
                .unwrap();
            assert!(!result.weather_status.is_empty());
            assert!(!result.risk_level.is_empty());
            assert_eq!(result.user_marker.province, result.user_province);
            assert_eq!(result.user_marker.marker_color, result.marker_color);
        }
    }

    #[tokio::test]
    async fn test_map_overview_scenario() {
        // 20 rows, 9 in the North
        let rows: Vec<DisasterLocation> = (0..20)
            .map(|i| {
                let region = if i < 9 { "Bắc" } else if i < 15 { "Trung" } else { "Nam" };
                location(&format!("p-{i}"), &format!("Tỉnh {i}"), region)
            })
            .collect();

        let overview = service(rows).build_map_overview(Region::North).await;
        assert_eq!(overview.len(), 10);
        assert!(overview[..8].iter().all(|e| e.region == "Miền Bắc"));
        assert_eq!(overview[7].province, "Tỉnh 7");
        assert_eq!(overview[8].province, "Tỉnh 9");
        assert_eq!(overview[9].province, "Tỉnh 10");
    }

    #[test]
    fn test_fallback_marker_color() {
        assert_eq!(fallback_marker_color("Siêu bão", RiskTier::Low), MarkerColor::Red);
        assert_eq!(fallback_marker_color("Ổn định", RiskTier::VeryHigh), MarkerColor::Red);
        assert_eq!(fallback_marker_color("Ngập sâu", RiskTier::High), MarkerColor::Yellow);
        assert_eq!(fallback_marker_color("Mưa rào", RiskTier::Low), MarkerColor::Orange);
        assert_eq!(fallback_marker_color("Ổn định", RiskTier::Medium), MarkerColor::Orange);
        assert_eq!(fallback_marker_color("Nắng", RiskTier::High), MarkerColor::Green);
    }

    #[test]
    fn test_map_registry_packages_preserves_count() {
        let codes = vec![
            "bh_thien_tai_mien_trung".to_string(),
            "bh_xe_ngap_nuoc".to_string(),
            "bh_nha_cua".to_string(),
        ];
        let mut row = location("ha-tinh", "Hà Tĩnh", "Trung");
        row.status = "ngập_lụt".to_string();
        row.recommended_packages = Some(
            crate::features::disaster_locations::models::encode_package_ids(&codes),
        );

        let mapped = map_registry_packages(&row);
        assert_eq!(mapped.len(), codes.len());
        assert!(mapped
            .iter()
            .all(|r| r.reason.starts_with("⚠️ Hà Tĩnh - Ngập Lụt: ")));
    }
}
