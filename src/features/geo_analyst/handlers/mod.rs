mod geo_analyst_handler;

pub use geo_analyst_handler::*;
