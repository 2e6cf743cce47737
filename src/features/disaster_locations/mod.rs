//! Disaster registry: the per-province disaster status table.
//!
//! Rows are seeded by migration and refreshed out of band by the weather
//! ingestion process. The geo analyst reads them through the
//! [`DisasterRegistry`](services::DisasterRegistry) trait.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/disaster-locations` | List all rows in registry order |
//! | GET | `/api/disaster-locations/region/{region}` | List rows of one region |
//! | GET | `/api/disaster-locations/search` | Search by province and/or status |
//! | GET | `/api/disaster-locations/{id}` | Get row by id |
//! | POST | `/api/disaster-locations` | Create row (admin) |
//! | PUT | `/api/disaster-locations/{id}` | Update row (admin) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{DisasterLocationService, DisasterRegistry, RegistryError};
