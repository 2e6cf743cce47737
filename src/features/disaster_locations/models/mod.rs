mod disaster_location;
mod disaster_status;
mod marker_color;

pub use disaster_location::{
    decode_package_ids, encode_package_ids, DisasterLocation, DISASTER_LOCATION_COLUMNS,
};
pub use disaster_status::DisasterStatus;
pub use marker_color::MarkerColor;
