use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

/// Map marker colour shown for a province
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Red,
    Orange,
    Yellow,
    Blue,
    Green,
}

impl MarkerColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerColor::Red => "red",
            MarkerColor::Orange => "orange",
            MarkerColor::Yellow => "yellow",
            MarkerColor::Blue => "blue",
            MarkerColor::Green => "green",
        }
    }

    /// Parses a stored colour, falling back to green for values outside the
    /// closed set.
    pub fn from_stored(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            tracing::warn!("Unknown marker colour '{}', using green", value);
            MarkerColor::Green
        })
    }
}

impl FromStr for MarkerColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "red" => Ok(MarkerColor::Red),
            "orange" => Ok(MarkerColor::Orange),
            "yellow" => Ok(MarkerColor::Yellow),
            "blue" => Ok(MarkerColor::Blue),
            "green" => Ok(MarkerColor::Green),
            other => Err(format!("Unknown marker colour: {}", other)),
        }
    }
}

impl std::fmt::Display for MarkerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_fallback() {
        assert_eq!("RED".parse::<MarkerColor>(), Ok(MarkerColor::Red));
        assert_eq!(MarkerColor::from_stored(" yellow "), MarkerColor::Yellow);
        assert_eq!(MarkerColor::from_stored("purple"), MarkerColor::Green);
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&MarkerColor::Orange).unwrap();
        assert_eq!(json, "\"orange\"");
    }
}
