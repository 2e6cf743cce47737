mod inputs;
mod recommendation;
mod region;
mod risk_tier;

pub use inputs::{UserProfile, WeatherData};
pub use recommendation::{
    DisasterInfo, LocationSummary, Recommendation, RecommendationResult, UserMarker,
};
pub use region::Region;
pub use risk_tier::RiskTier;
