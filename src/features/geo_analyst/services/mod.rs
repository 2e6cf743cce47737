pub mod gazetteer;
pub mod map_overview;
pub mod package_catalog;
pub mod risk_profile;
pub mod rule_set;

mod geo_analyst_service;

pub use geo_analyst_service::{
    fallback_marker_color, map_registry_packages, GeoAnalystError, GeoAnalystService,
};
