use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Administrative macro-region of Vietnam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Region {
    #[serde(rename = "Miền Bắc", alias = "North", alias = "Bắc")]
    North,
    #[serde(rename = "Miền Trung", alias = "Central", alias = "Trung")]
    Central,
    #[serde(rename = "Miền Nam", alias = "South", alias = "Nam")]
    South,
}

impl Region {
    /// Gazetteer iteration order
    pub const ALL: [Region; 3] = [Region::North, Region::Central, Region::South];

    pub fn label(&self) -> &'static str {
        match self {
            Region::North => "Miền Bắc",
            Region::Central => "Miền Trung",
            Region::South => "Miền Nam",
        }
    }

    /// Form used by the disaster registry's `region` column
    pub fn short_form(&self) -> &'static str {
        match self {
            Region::North => "Bắc",
            Region::Central => "Trung",
            Region::South => "Nam",
        }
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_lowercase();
        let value = value.strip_prefix("miền ").unwrap_or(&value);
        match value {
            "bắc" | "north" => Ok(Region::North),
            "trung" | "central" => Ok(Region::Central),
            "nam" | "south" => Ok(Region::South),
            _ => Err(format!("Unknown region: {}", s)),
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
