mod disaster_location_handler;

pub use disaster_location_handler::*;
