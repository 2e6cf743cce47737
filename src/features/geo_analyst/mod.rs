//! Geo-risk insurance recommendation.
//!
//! Resolves a free-text Vietnamese address to a region and province, reads
//! the disaster registry for that province and recommends insurance
//! packages. When the registry has nothing usable, a static risk table and
//! keyword rules over caller-supplied weather take over.
//!
//! ## Resolution order
//!
//! 1. Gazetteer: first alias found in the address, scanning North, Central,
//!    South in list order. No match is the only hard error.
//! 2. Registry row with at least one catalog package: status, severity and
//!    marker colour are used as stored.
//! 3. Otherwise: baseline risk escalated by weather keywords, keyword rule
//!    packages, heuristic marker colour.
//! 4. Map overview: same-region registry rows, then other regions; sample
//!    data when the registry is empty or down.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/geo-analyst/analyze` | Analyze a user profile |
//! | GET | `/api/geo-analyst/map-overview` | Map overview for a region |
//! | POST | `/api/geo-analyst/prompt` | Render the document model prompt |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{GeoAnalystError, GeoAnalystService};
