use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Ordered risk scale, lowest first
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum RiskTier {
    #[serde(rename = "Thấp")]
    Low,
    #[serde(rename = "Trung bình")]
    Medium,
    #[serde(rename = "Cao")]
    High,
    #[serde(rename = "Rất cao")]
    VeryHigh,
}

impl RiskTier {
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Thấp",
            RiskTier::Medium => "Trung bình",
            RiskTier::High => "Cao",
            RiskTier::VeryHigh => "Rất cao",
        }
    }

    /// One step up the scale, saturating at `VeryHigh`
    pub fn escalate(self) -> Self {
        match self {
            RiskTier::Low => RiskTier::Medium,
            RiskTier::Medium => RiskTier::High,
            RiskTier::High | RiskTier::VeryHigh => RiskTier::VeryHigh,
        }
    }
}

impl FromStr for RiskTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "thấp" | "low" => Ok(RiskTier::Low),
            "trung bình" | "medium" => Ok(RiskTier::Medium),
            "cao" | "high" => Ok(RiskTier::High),
            "rất cao" | "very_high" | "very high" => Ok(RiskTier::VeryHigh),
            _ => Err(format!("Unknown risk tier: {}", s)),
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escalate_saturates() {
        assert_eq!(RiskTier::Low.escalate(), RiskTier::Medium);
        assert_eq!(RiskTier::Medium.escalate(), RiskTier::High);
        assert_eq!(RiskTier::High.escalate(), RiskTier::VeryHigh);
        assert_eq!(RiskTier::VeryHigh.escalate(), RiskTier::VeryHigh);
    }

    #[test]
    fn test_ordering() {
        assert!(RiskTier::Low < RiskTier::Medium);
        assert!(RiskTier::High < RiskTier::VeryHigh);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("Trung bình".parse::<RiskTier>(), Ok(RiskTier::Medium));
        assert_eq!("RẤT CAO".parse::<RiskTier>(), Ok(RiskTier::VeryHigh));
        assert_eq!("high".parse::<RiskTier>(), Ok(RiskTier::High));
        assert!("extreme".parse::<RiskTier>().is_err());
    }
}
