pub mod disaster_locations;
pub mod geo_analyst;
