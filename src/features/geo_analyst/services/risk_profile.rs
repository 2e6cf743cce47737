//! Static baseline risk per province, from historical disaster records.
//!
//! Only a fallback modifier: live registry data always takes precedence.

use crate::features::geo_analyst::models::RiskTier;

pub struct RiskProfile {
    /// Lowercase province key
    pub province: &'static str,
    pub baseline: RiskTier,
    pub common_disasters: &'static [&'static str],
}

static HIGH_RISK_PROVINCES: &[RiskProfile] = &[
    RiskProfile {
        province: "hà tĩnh",
        baseline: RiskTier::High,
        common_disasters: &["lũ lụt", "ngập úng", "bão"],
    },
    RiskProfile {
        province: "nghệ an",
        baseline: RiskTier::High,
        common_disasters: &["lũ lụt", "ngập úng", "bão"],
    },
    RiskProfile {
        province: "quảng bình",
        baseline: RiskTier::High,
        common_disasters: &["lũ lụt", "ngập úng"],
    },
    RiskProfile {
        province: "quảng trị",
        baseline: RiskTier::High,
        common_disasters: &["lũ lụt", "bão"],
    },
    RiskProfile {
        province: "thừa thiên huế",
        baseline: RiskTier::High,
        common_disasters: &["lũ lụt", "bão"],
    },
    RiskProfile {
        province: "quảng nam",
        baseline: RiskTier::High,
        common_disasters: &["lũ lụt", "bão", "sạt lở"],
    },
    RiskProfile {
        province: "quảng ngãi",
        baseline: RiskTier::High,
        common_disasters: &["bão", "lũ lụt"],
    },
    RiskProfile {
        province: "quảng ninh",
        baseline: RiskTier::High,
        common_disasters: &["bão", "sóng biển"],
    },
    RiskProfile {
        province: "hải phòng",
        baseline: RiskTier::Medium,
        common_disasters: &["bão", "ngập úng"],
    },
    RiskProfile {
        province: "thanh hóa",
        baseline: RiskTier::Medium,
        common_disasters: &["lũ lụt", "bão"],
    },
];

/// Weather words that push the risk one tier up
const ESCALATION_KEYWORDS: &[&str] = &["bão", "lũ", "lụt", "ngập", "sạt lở"];

/// Risk profile of a known high-risk province, matched case-insensitively
pub fn lookup(province: &str) -> Option<&'static RiskProfile> {
    let key = province.trim().to_lowercase();
    HIGH_RISK_PROVINCES.iter().find(|p| p.province == key)
}

pub fn is_high_risk(province: &str) -> bool {
    lookup(province).is_some()
}

pub fn baseline(province: &str) -> RiskTier {
    lookup(province).map_or(RiskTier::Low, |p| p.baseline)
}

/// Baseline tier of `province`, escalated one step when `weather_text`
/// mentions storm, flood, inundation or landslide. Never de-escalates.
pub fn get_risk_level(province: &str, weather_text: &str) -> RiskTier {
    let base = baseline(province);
    let weather = weather_text.to_lowercase();

    if ESCALATION_KEYWORDS.iter().any(|k| weather.contains(k)) {
        base.escalate()
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::geo_analyst::services::gazetteer;

    #[test]
    fn test_baseline() {
        assert_eq!(baseline("Hà Tĩnh"), RiskTier::High);
        assert_eq!(baseline("hải phòng"), RiskTier::Medium);
        assert_eq!(baseline("Cần Thơ"), RiskTier::Low);
    }

    #[test]
    fn test_escalation() {
        assert_eq!(get_risk_level("Cần Thơ", "Ổn định"), RiskTier::Low);
        assert_eq!(get_risk_level("Cần Thơ", "Mưa lớn gây NGẬP"), RiskTier::Medium);
        assert_eq!(get_risk_level("Hải Phòng", "Cảnh báo bão"), RiskTier::High);
        assert_eq!(get_risk_level("Hà Tĩnh", "lũ quét"), RiskTier::VeryHigh);
    }

    #[test]
    fn test_escalation_is_single_step() {
        // Several keywords still escalate only once
        assert_eq!(get_risk_level("Cần Thơ", "bão lũ ngập sạt lở"), RiskTier::Medium);
    }

    #[test]
    fn test_never_below_baseline() {
        let weathers = ["", "Ổn định", "Nắng nhẹ", "bão", "ngập sâu", "sạt lở đất"];
        for province in gazetteer::provinces() {
            for weather in weathers {
                assert!(
                    get_risk_level(province.name, weather) >= baseline(province.name),
                    "{} / {}",
                    province.name,
                    weather
                );
            }
        }
    }

    #[test]
    fn test_every_high_risk_key_is_a_gazetteer_province() {
        for profile in HIGH_RISK_PROVINCES {
            assert!(!profile.common_disasters.is_empty());
            assert!(
                gazetteer::provinces().iter().any(|p| p.key() == profile.province),
                "{}",
                profile.province
            );
        }
    }
}
