use crate::engine::geo::min_distance_to_transport;
use crate::models::{Area, TransportStop};
use serde::{Serialize, Serializer};

/// Bedroom-count constraint. The listing data caps the distinction at five,
/// so "five or more" is a single bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bedrooms {
    Exactly(u32),
    FivePlus,
}

impl Bedrooms {
    pub fn matches(&self, bedrooms: u32) -> bool {
        match *self {
            Bedrooms::Exactly(n) => bedrooms == n,
            Bedrooms::FivePlus => bedrooms >= 5,
        }
    }

    /// Wire encoding used by the affordability service; "5" means five or
    /// more.
    pub fn to_query(self) -> String {
        match self {
            Bedrooms::Exactly(n) => n.to_string(),
            Bedrooms::FivePlus => "5".to_string(),
        }
    }
}

impl Serialize for Bedrooms {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_query())
    }
}

/// Property-attribute constraints; every field absent/false means "no
/// constraint".
#[derive(Debug, Clone, Default)]
pub struct AdvancedFilters {
    pub property_type: Option<String>,
    pub bedrooms: Option<Bedrooms>,
    pub furnished: bool,
    pub pet_friendly: bool,
    pub new_listing: bool,
    pub family_friendly: bool,
}

/// Composite filter, built fresh from the current user state on every
/// recomputation. Not persisted.
#[derive(Debug, Clone)]
pub struct FilterCriteria {
    pub max_price: f64,
    pub max_proximity_km: f64,
    pub name_search: Option<String>,
    pub required_amenities: Vec<String>,
    pub advanced: AdvancedFilters,
}

impl FilterCriteria {
    /// Price and proximity only. This is the filter shape used for the
    /// cross-profession comparison, where amenity and attribute filters
    /// would break comparability.
    pub fn basic(max_price: f64, max_proximity_km: f64) -> Self {
        Self {
            max_price,
            max_proximity_km,
            name_search: None,
            required_amenities: Vec::new(),
            advanced: AdvancedFilters::default(),
        }
    }

    fn matches(&self, area: &Area, stops: &[TransportStop]) -> bool {
        if area.price > self.max_price {
            return false;
        }
        if min_distance_to_transport(area, stops) > self.max_proximity_km {
            return false;
        }
        if let Some(needle) = &self.name_search {
            if !area
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        if !self
            .required_amenities
            .iter()
            .all(|amenity| area.has_amenity(amenity))
        {
            return false;
        }
        let adv = &self.advanced;
        if let Some(property_type) = &adv.property_type {
            if area.property_type != *property_type {
                return false;
            }
        }
        if let Some(bedrooms) = adv.bedrooms {
            if !bedrooms.matches(area.bedrooms) {
                return false;
            }
        }
        if adv.furnished && area.furnished != 1 {
            return false;
        }
        if adv.pet_friendly && area.pet_friendly != 1 {
            return false;
        }
        if adv.new_listing && area.new_listing != 1 {
            return false;
        }
        if adv.family_friendly && area.family_friendly != 1 {
            return false;
        }
        true
    }
}

/// Order-preserving conjunctive filter over the loaded areas. Never mutates
/// its input; the returned collection is the snapshot every downstream
/// consumer works from.
pub fn filter_areas(
    areas: &[Area],
    criteria: &FilterCriteria,
    stops: &[TransportStop],
) -> Vec<Area> {
    areas
        .iter()
        .filter(|area| criteria.matches(area, stops))
        .cloned()
        .collect()
}
