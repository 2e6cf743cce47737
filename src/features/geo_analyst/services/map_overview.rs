//! Bounded list of comparison entries shown around the user's marker.

use crate::core::config::GeoAnalystConfig;
use crate::features::disaster_locations::models::{DisasterLocation, MarkerColor};
use crate::features::geo_analyst::models::{LocationSummary, Region, RiskTier};
use crate::features::geo_analyst::services::gazetteer;
use crate::shared::text::truncate_with_ellipsis;

struct SampleWeather {
    weather: &'static str,
    marker_color: MarkerColor,
    risk: RiskTier,
}

const STABLE_SAMPLE: SampleWeather = SampleWeather {
    weather: "Ổn định",
    marker_color: MarkerColor::Green,
    risk: RiskTier::Low,
};

/// Sample conditions used when the registry has no rows, keyed by lowercase province
static SAMPLE_WEATHER: &[(&str, SampleWeather)] = &[
    ("hà tĩnh", SampleWeather { weather: "Ngập lụt", marker_color: MarkerColor::Red, risk: RiskTier::High }),
    ("nghệ an", SampleWeather { weather: "Ngập lụt", marker_color: MarkerColor::Red, risk: RiskTier::High }),
    ("quảng bình", SampleWeather { weather: "Ngập lụt", marker_color: MarkerColor::Red, risk: RiskTier::High }),
    ("quảng trị", SampleWeather { weather: "Ngập lụt", marker_color: MarkerColor::Red, risk: RiskTier::High }),
    ("thừa thiên huế", SampleWeather { weather: "Mưa lớn", marker_color: MarkerColor::Blue, risk: RiskTier::Medium }),
    ("đà nẵng", SampleWeather { weather: "Cảnh báo bão", marker_color: MarkerColor::Red, risk: RiskTier::Medium }),
    ("quảng nam", SampleWeather { weather: "Ngập lụt", marker_color: MarkerColor::Red, risk: RiskTier::High }),
    ("quảng ngãi", SampleWeather { weather: "Mưa lớn", marker_color: MarkerColor::Blue, risk: RiskTier::Medium }),
    ("hà nội", SampleWeather { weather: "Cảnh báo bão", marker_color: MarkerColor::Red, risk: RiskTier::Medium }),
    ("hải phòng", SampleWeather { weather: "Cảnh báo bão", marker_color: MarkerColor::Red, risk: RiskTier::High }),
    ("quảng ninh", SampleWeather { weather: "Cảnh báo bão", marker_color: MarkerColor::Red, risk: RiskTier::High }),
    ("thái nguyên", SampleWeather { weather: "Mưa lớn", marker_color: MarkerColor::Blue, risk: RiskTier::Medium }),
    ("nam định", STABLE_SAMPLE),
    ("tp hồ chí minh", STABLE_SAMPLE),
    ("cần thơ", STABLE_SAMPLE),
    ("bà rịa - vũng tàu", STABLE_SAMPLE),
];

/// Fixed comparison markers appended to the sample overview, one per region
const COMPARISON_PROVINCES: &[(&str, Region)] = &[
    ("Hà Nội", Region::North),
    ("TP Hồ Chí Minh", Region::South),
];

fn sample_for(province: &str) -> &'static SampleWeather {
    let key = province.to_lowercase();
    SAMPLE_WEATHER
        .iter()
        .find(|(name, _)| *name == key)
        .map_or(&STABLE_SAMPLE, |(_, sample)| sample)
}

fn sample_entry(province: &str, region: Region) -> LocationSummary {
    let sample = sample_for(province);
    LocationSummary {
        province: province.to_string(),
        region: region.label().to_string(),
        weather: sample.weather.to_string(),
        marker_color: sample.marker_color,
        risk: sample.risk.label().to_string(),
        latitude: None,
        longitude: None,
        detail: None,
    }
}

fn registry_entry(location: &DisasterLocation, detail_max_chars: usize) -> LocationSummary {
    LocationSummary {
        province: location.province.clone(),
        region: location.region_label(),
        weather: location.disaster_status().humanize(),
        marker_color: location.marker(),
        risk: location.severity.clone(),
        latitude: location.latitude,
        longitude: location.longitude,
        detail: location
            .detail
            .as_deref()
            .map(|d| truncate_with_ellipsis(d, detail_max_chars)),
    }
}

/// Same-region rows first (registry order), then a few rows from other regions.
pub fn from_registry(
    locations: &[DisasterLocation],
    region: Region,
    config: &GeoAnalystConfig,
) -> Vec<LocationSummary> {
    let (same, other): (Vec<&DisasterLocation>, Vec<&DisasterLocation>) = locations
        .iter()
        .partition(|location| location.parsed_region() == Some(region));

    same.into_iter()
        .take(config.same_region_limit)
        .chain(other.into_iter().take(config.other_region_limit))
        .map(|location| registry_entry(location, config.detail_max_chars))
        .collect()
}

/// Overview synthesized from the gazetteer and sample conditions, for when
/// the registry cannot supply anything.
pub fn fallback(region: Region, config: &GeoAnalystConfig) -> Vec<LocationSummary> {
    let comparisons = COMPARISON_PROVINCES
        .iter()
        .filter(|(_, comparison_region)| *comparison_region != region)
        .take(config.other_region_limit)
        .map(|(province, comparison_region)| sample_entry(province, *comparison_region));

    gazetteer::provinces_in(region)
        .take(config.same_region_limit)
        .map(|province| sample_entry(province.name, region))
        .chain(comparisons)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::location;

    fn names(overview: &[LocationSummary]) -> Vec<&str> {
        overview.iter().map(|e| e.province.as_str()).collect()
    }

    #[test]
    fn test_fallback_central() {
        let overview = fallback(Region::Central, &GeoAnalystConfig::default());
        assert_eq!(overview.len(), 10);
        assert_eq!(overview[0].province, "Thanh Hóa");
        assert_eq!(overview[0].weather, "Ổn định");
        assert_eq!(overview[2].province, "Hà Tĩnh");
        assert_eq!(overview[2].marker_color, MarkerColor::Red);
        assert_eq!(overview[2].risk, "Cao");
        assert!(overview[..8].iter().all(|e| e.region == "Miền Trung"));
        assert_eq!(names(&overview[8..]), vec!["Hà Nội", "TP Hồ Chí Minh"]);
    }

    #[test]
    fn test_fallback_skips_own_region_comparison() {
        let overview = fallback(Region::North, &GeoAnalystConfig::default());
        assert_eq!(overview.len(), 9);
        assert_eq!(overview[8].province, "TP Hồ Chí Minh");
        assert_eq!(overview[8].region, "Miền Nam");

        let overview = fallback(Region::South, &GeoAnalystConfig::default());
        assert_eq!(overview.len(), 9);
        assert_eq!(overview[0].province, "TP Hồ Chí Minh");
        assert_eq!(overview[8].province, "Hà Nội");
        assert_eq!(overview[8].marker_color, MarkerColor::Red);
    }

    #[test]
    fn test_registry_same_region_first() {
        // 20 rows, 9 of them in the North, interleaved with other regions
        let rows: Vec<DisasterLocation> = (0..20)
            .map(|i| {
                let region = if i % 2 == 0 && i < 18 { "Bắc" } else if i % 3 == 0 { "Trung" } else { "Nam" };
                location(&format!("p-{i}"), &format!("Tỉnh {i}"), region)
            })
            .collect();
        assert_eq!(rows.iter().filter(|r| r.region == "Bắc").count(), 9);

        let overview = from_registry(&rows, Region::North, &GeoAnalystConfig::default());
        assert_eq!(overview.len(), 10);
        assert_eq!(
            names(&overview),
            vec![
                "Tỉnh 0", "Tỉnh 2", "Tỉnh 4", "Tỉnh 6", "Tỉnh 8", "Tỉnh 10", "Tỉnh 12", "Tỉnh 14",
                "Tỉnh 1", "Tỉnh 3",
            ]
        );
        assert!(overview[..8].iter().all(|e| e.region == "Miền Bắc"));
        assert!(overview[8..].iter().all(|e| e.region != "Miền Bắc"));
    }

    #[test]
    fn test_registry_entry_formatting() {
        let mut row = location("ha-tinh", "Hà Tĩnh", "Trung");
        row.status = "ngập_lụt".to_string();
        row.marker_color = "red".to_string();
        row.severity = "Cao".to_string();
        row.detail = Some("x".repeat(150));

        let overview = from_registry(&[row], Region::Central, &GeoAnalystConfig::default());
        let entry = &overview[0];
        assert_eq!(entry.weather, "Ngập Lụt");
        assert_eq!(entry.region, "Miền Trung");
        assert_eq!(entry.risk, "Cao");
        assert_eq!(entry.marker_color, MarkerColor::Red);
        assert_eq!(entry.detail.as_deref(), Some(format!("{}...", "x".repeat(100)).as_str()));
    }

    #[test]
    fn test_unknown_region_counts_as_other() {
        let rows = vec![
            location("a", "A", "Tây Nguyên"),
            location("b", "B", "Miền Nam"),
        ];
        let overview = from_registry(&rows, Region::South, &GeoAnalystConfig::default());
        assert_eq!(names(&overview), vec!["B", "A"]);
        assert_eq!(overview[1].region, "Tây Nguyên");
    }

    #[test]
    fn test_respects_configured_limits() {
        let rows: Vec<DisasterLocation> = (0..12)
            .map(|i| location(&format!("p-{i}"), &format!("P{i}"), if i < 6 { "Nam" } else { "Bắc" }))
            .collect();
        let config = GeoAnalystConfig::new(3, 1, 100);
        let overview = from_registry(&rows, Region::South, &config);
        assert_eq!(names(&overview), vec!["P0", "P1", "P2", "P6"]);

        let overview = fallback(Region::Central, &config);
        assert_eq!(names(&overview), vec!["Thanh Hóa", "Nghệ An", "Hà Tĩnh", "Hà Nội"]);
    }
}
