mod disaster_location_dto;

pub use disaster_location_dto::*;
