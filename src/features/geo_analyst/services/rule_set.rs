//! Keyword rules producing fallback package suggestions from weather text.

use crate::features::geo_analyst::models::Recommendation;
use crate::features::geo_analyst::services::package_catalog::{self, PackageCatalogEntry};
use crate::features::geo_analyst::services::risk_profile;

pub const MAX_RECOMMENDATIONS: usize = 5;

/// Percent of the comprehensive package offered to high-risk provinces
const HIGH_RISK_COMPREHENSIVE_PERCENT: u8 = 92;

struct Rule {
    keywords: &'static [&'static str],
    package_code: &'static str,
}

/// Evaluated in order; every matching rule contributes one recommendation
static INSURANCE_RULES: &[Rule] = &[
    Rule {
        keywords: &["bão", "cảnh báo bão", "siêu bão", "áp thấp nhiệt đới"],
        package_code: package_catalog::COMPREHENSIVE_DISASTER,
    },
    Rule {
        keywords: &["ngập", "mưa lớn", "mưa to", "triều cường"],
        package_code: "bh_phuong_tien_ngap_nuoc",
    },
    Rule {
        keywords: &["lụt", "lũ", "lũ quét", "ngập sâu"],
        package_code: "bh_nha_cua_lu_lut",
    },
    Rule {
        keywords: &["thời tiết khắc nghiệt", "mưa kéo dài", "rét đậm"],
        package_code: "bh_suc_khoe_thien_tai",
    },
    Rule {
        keywords: &["giao thông nguy hiểm", "sương mù", "đường trơn"],
        package_code: "bh_tai_nan_ca_nhan",
    },
    Rule {
        keywords: &["sạt lở", "lở đất", "núi lở"],
        package_code: "bh_tai_san_sat_lo",
    },
];

fn to_recommendation(entry: &PackageCatalogEntry, percent: u8, reason: String) -> Recommendation {
    Recommendation {
        package: entry.name.to_string(),
        package_id: entry.package_id.to_string(),
        code: entry.code.to_string(),
        percent,
        reason,
    }
}

/// Keyword-matched packages for the given weather, highest percent first, at most five.
///
/// A high-risk province that no storm rule already covered gets the
/// comprehensive disaster package at 92% in front of the rule matches.
/// An empty list is a valid answer.
pub fn recommend_insurance(weather_text: &str, alert_text: &str, province: &str) -> Vec<Recommendation> {
    let haystack = format!("{} {}", weather_text, alert_text).to_lowercase();

    let mut recommendations: Vec<Recommendation> = INSURANCE_RULES
        .iter()
        .filter(|rule| rule.keywords.iter().any(|k| haystack.contains(k)))
        .filter_map(|rule| package_catalog::get(rule.package_code))
        .map(|entry| to_recommendation(entry, entry.percent, entry.reason.to_string()))
        .collect();

    let has_comprehensive = recommendations
        .iter()
        .any(|r| r.code == package_catalog::COMPREHENSIVE_DISASTER);

    if risk_profile::is_high_risk(province) && !has_comprehensive {
        if let Some(entry) = package_catalog::get(package_catalog::COMPREHENSIVE_DISASTER) {
            let reason = format!(
                "{} là khu vực thường xuyên chịu ảnh hưởng thiên tai.",
                province
            );
            recommendations.insert(
                0,
                to_recommendation(entry, HIGH_RISK_COMPREHENSIVE_PERCENT, reason),
            );
        }
    }

    // Vec::sort_by is stable, ties keep encounter order
    recommendations.sort_by(|a, b| b.percent.cmp(&a.percent));
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
