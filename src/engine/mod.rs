//! Pure transformations from `(areas, stops, criteria)` to filtered sets,
//! ranked lists, heatmap intensities, suggestions, and the comparison
//! matrix. Everything here is synchronous and allocation-per-output; inputs
//! are never mutated.

pub mod compare;
pub mod export;
pub mod filter;
pub mod geo;
pub mod heatmap;
pub mod ranking;
pub mod suggest;

pub use compare::{build_comparison, ComparisonResult, ComparisonRow};
pub use export::to_csv;
pub use filter::{filter_areas, AdvancedFilters, Bedrooms, FilterCriteria};
pub use geo::{distance_km, min_distance_to_transport};
pub use heatmap::{heat_points, HeatField, HeatPoint};
pub use ranking::{top_n, SortOrder, DEFAULT_TOP_N};
pub use suggest::{rank_suggestions, SuggestionOutcome};

#[cfg(test)]
pub(crate) mod testutil {
    use crate::models::{Area, TransportStop};
    use std::collections::HashMap;

    pub fn area(name: &str, price: f64, score: f64, latitude: f64, longitude: f64) -> Area {
        Area {
            name: name.to_string(),
            latitude,
            longitude,
            price,
            score,
            property_type: "Apartment".to_string(),
            bedrooms: 2,
            furnished: 0,
            pet_friendly: 0,
            new_listing: 0,
            family_friendly: 0,
            proximity: None,
            amenities: HashMap::new(),
        }
    }

    pub fn stop(name: &str, latitude: f64, longitude: f64) -> TransportStop {
        TransportStop {
            stop_name: name.to_string(),
            latitude,
            longitude,
        }
    }
}
