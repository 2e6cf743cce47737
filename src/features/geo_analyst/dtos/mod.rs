mod geo_analyst_dto;

pub use geo_analyst_dto::*;
