use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// A fetched record that violates the ingestion invariants.
///
/// The engine itself never raises this; records are checked once at the
/// service boundary so every downstream transformation can assume
/// well-formed input.
#[derive(Debug, Error)]
pub enum DataIntegrityError {
    #[error("area '{name}' has negative price {price}")]
    NegativePrice { name: String, price: f64 },
    #[error("'{name}' has out-of-range coordinates ({latitude}, {longitude})")]
    BadCoordinates {
        name: String,
        latitude: f64,
        longitude: f64,
    },
}

fn check_coordinates(name: &str, latitude: f64, longitude: f64) -> Result<(), DataIntegrityError> {
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(DataIntegrityError::BadCoordinates {
            name: name.to_string(),
            latitude,
            longitude,
        });
    }
    Ok(())
}

/// One candidate neighbourhood/listing as served by the affordability
/// endpoint. Immutable for the lifetime of an analysis; the whole
/// collection is replaced on re-fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub price: f64,
    /// Affordability score computed upstream, higher = more affordable.
    /// Treated as opaque data here.
    pub score: f64,
    pub property_type: String,
    pub bedrooms: u32,
    pub furnished: u8,
    pub pet_friendly: u8,
    pub new_listing: u8,
    pub family_friendly: u8,
    /// Distance in km to the nearest transit stop. Only populated on areas
    /// returned by the suggest endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proximity: Option<f64>,
    /// Open set of 0/1 amenity flags (school, park, supermarket, ...).
    /// Whatever extra keys the service sends land here.
    #[serde(flatten)]
    pub amenities: HashMap<String, u8>,
}

impl Area {
    pub fn has_amenity(&self, name: &str) -> bool {
        self.amenities.get(name).copied() == Some(1)
    }

    pub fn validate(&self) -> Result<(), DataIntegrityError> {
        if self.price < 0.0 {
            return Err(DataIntegrityError::NegativePrice {
                name: self.name.clone(),
                price: self.price,
            });
        }
        check_coordinates(&self.name, self.latitude, self.longitude)
    }
}

/// A fixed public-transport stop, used only for proximity computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportStop {
    pub stop_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl TransportStop {
    pub fn validate(&self) -> Result<(), DataIntegrityError> {
        check_coordinates(&self.stop_name, self.latitude, self.longitude)
    }
}
