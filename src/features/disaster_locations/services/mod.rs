mod disaster_location_service;
mod registry;

pub use disaster_location_service::DisasterLocationService;
pub use registry::{DisasterRegistry, RegistryError};
