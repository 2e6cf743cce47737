use async_trait::async_trait;
use thiserror::Error;

use crate::features::disaster_locations::models::DisasterLocation;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Disaster registry unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
}

/// Read access to the disaster registry as consumed by the geo analyst.
///
/// Reads are eventually consistent snapshots; rows may be overwritten by the
/// weather ingestion process between two calls.
#[async_trait]
pub trait DisasterRegistry: Send + Sync {
    /// Row whose `province` equals `province` exactly
    async fn get(&self, province: &str) -> Result<Option<DisasterLocation>, RegistryError>;

    /// Every row, in registry order
    async fn list_all(&self) -> Result<Vec<DisasterLocation>, RegistryError>;
}
