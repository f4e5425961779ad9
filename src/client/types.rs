use crate::engine::{AdvancedFilters, Bedrooms};
use serde::Serialize;

/// Query parameters for the affordability endpoint.
#[derive(Debug, Clone, Default)]
pub struct AreaQuery {
    pub profession: String,
    pub amenities: Vec<String>,
    pub area_search: Option<String>,
    pub advanced: AdvancedFilters,
}

impl AreaQuery {
    pub fn for_profession(profession: impl Into<String>) -> Self {
        Self {
            profession: profession.into(),
            ..Self::default()
        }
    }

    /// (key, value) pairs in the service's wire format. Amenities are sent
    /// as one CSV parameter; boolean flags only when set.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("profession", self.profession.clone())];
        if !self.amenities.is_empty() {
            pairs.push(("amenities", self.amenities.join(",")));
        }
        if let Some(area_search) = &self.area_search {
            pairs.push(("area", area_search.clone()));
        }
        let adv = &self.advanced;
        if let Some(property_type) = &adv.property_type {
            pairs.push(("property_type", property_type.clone()));
        }
        if let Some(bedrooms) = adv.bedrooms {
            pairs.push(("bedrooms", bedrooms.to_query()));
        }
        if adv.furnished {
            pairs.push(("furnished", "1".to_string()));
        }
        if adv.pet_friendly {
            pairs.push(("pet_friendly", "1".to_string()));
        }
        if adv.new_listing {
            pairs.push(("new_listing", "1".to_string()));
        }
        if adv.family_friendly {
            pairs.push(("family_friendly", "1".to_string()));
        }
        pairs
    }
}

/// User profile posted to the suggest endpoint. Serializes directly into
/// the JSON body the service expects.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionRequest {
    pub income: f64,
    #[serde(rename = "family")]
    pub family_size: u32,
    pub amenities: Vec<String>,
    #[serde(rename = "proximity")]
    pub proximity_km: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<Bedrooms>,
    pub furnished: u8,
    pub pet_friendly: u8,
    pub new_listing: u8,
    pub family_friendly: u8,
}

impl SuggestionRequest {
    pub fn new(income: f64, family_size: u32, proximity_km: f64) -> Self {
        Self {
            income,
            family_size,
            amenities: Vec::new(),
            proximity_km,
            property_type: None,
            bedrooms: None,
            furnished: 0,
            pet_friendly: 0,
            new_listing: 0,
            family_friendly: 0,
        }
    }
}
