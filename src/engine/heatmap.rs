use crate::models::Area;
use serde::Serialize;

/// Which numeric field drives the gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatField {
    Score,
    Price,
}

/// One heatmap point: coordinates plus an intensity in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub intensity: f64,
}

/// Map each area to a gradient intensity in [0, 1].
///
/// Scores pass through (the service already normalizes them; clamped in case
/// upstream drifts slightly out of range). Prices are rescaled against the
/// min/max of the set currently in view, so the cheapest visible area renders
/// near 1 (green) and the priciest near 0 (red). The normalization is
/// deliberately relative to the current filtered set, not the full dataset.
pub fn heat_points(areas: &[Area], field: HeatField) -> Vec<HeatPoint> {
    if areas.is_empty() {
        return Vec::new();
    }
    match field {
        HeatField::Score => areas
            .iter()
            .map(|area| HeatPoint {
                latitude: area.latitude,
                longitude: area.longitude,
                intensity: area.score.clamp(0.0, 1.0),
            })
            .collect(),
        HeatField::Price => {
            let min = areas.iter().map(|a| a.price).fold(f64::INFINITY, f64::min);
            let max = areas
                .iter()
                .map(|a| a.price)
                .fold(f64::NEG_INFINITY, f64::max);
            // The +1 keeps the denominator non-zero when every price is equal.
            areas
                .iter()
                .map(|area| HeatPoint {
                    latitude: area.latitude,
                    longitude: area.longitude,
                    intensity: 1.0 - (area.price - min) / (max - min + 1.0),
                })
                .collect()
        }
    }
}
