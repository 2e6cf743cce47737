#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use chrono::{TimeZone, Utc};

#[cfg(test)]
use fake::{faker::lorem::en::Sentence, Fake};

#[cfg(test)]
use crate::features::disaster_locations::models::DisasterLocation;

#[cfg(test)]
use crate::features::disaster_locations::services::{DisasterRegistry, RegistryError};

/// A stable registry row with filler advice/detail text
#[cfg(test)]
pub fn location(id: &str, province: &str, region: &str) -> DisasterLocation {
    let created_at = Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap();
    DisasterLocation {
        id: id.to_string(),
        province: province.to_string(),
        region: region.to_string(),
        latitude: Some(16.0),
        longitude: Some(107.0),
        status: "ổn_định".to_string(),
        marker_color: "green".to_string(),
        severity: "Thấp".to_string(),
        advice: Some(Sentence(4..8).fake()),
        detail: Some(Sentence(4..8).fake()),
        recommended_packages: None,
        weather_info: None,
        last_updated: created_at,
        created_at,
    }
}

/// Registry backed by a vector, in registry order
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryDisasterRegistry {
    locations: Vec<DisasterLocation>,
}

#[cfg(test)]
impl InMemoryDisasterRegistry {
    pub fn new(locations: Vec<DisasterLocation>) -> Self {
        Self { locations }
    }
}

#[cfg(test)]
#[async_trait]
impl DisasterRegistry for InMemoryDisasterRegistry {
    async fn get(&self, province: &str) -> Result<Option<DisasterLocation>, RegistryError> {
        Ok(self
            .locations
            .iter()
            .find(|l| l.province == province)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<DisasterLocation>, RegistryError> {
        Ok(self.locations.clone())
    }
}

/// Registry whose every call fails as if the database were down
#[cfg(test)]
pub struct UnavailableDisasterRegistry;

#[cfg(test)]
#[async_trait]
impl DisasterRegistry for UnavailableDisasterRegistry {
    async fn get(&self, _province: &str) -> Result<Option<DisasterLocation>, RegistryError> {
        Err(RegistryError::Unavailable(sqlx::Error::PoolTimedOut))
    }

    async fn list_all(&self) -> Result<Vec<DisasterLocation>, RegistryError> {
        Err(RegistryError::Unavailable(sqlx::Error::PoolTimedOut))
    }
}
