use crate::models::{Area, TransportStop};

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance in kilometres between two WGS84
/// coordinates. Coordinates are assumed validated at ingestion; out-of-range
/// input still yields a numeric result.
pub fn distance_km(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
    let d_lat = (lat_b - lat_a).to_radians();
    let d_lon = (lon_b - lon_a).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat_a.to_radians().cos() * lat_b.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Distance from an area to its nearest transit stop.
///
/// Returns infinity when no stops are loaded, so a missing transport dataset
/// fails any finite proximity filter instead of passing everything. Linear
/// scan; the datasets are city-level (low thousands of stops at most).
pub fn min_distance_to_transport(area: &Area, stops: &[TransportStop]) -> f64 {
    stops
        .iter()
        .map(|stop| distance_km(area.latitude, area.longitude, stop.latitude, stop.longitude))
        .fold(f64::INFINITY, f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testutil::{area, stop};
    use approx::assert_relative_eq;

    #[test]
    fn distance_is_symmetric() {
        let ab = distance_km(25.27, 55.31, 59.31, 18.07);
        let ba = distance_km(59.31, 18.07, 25.27, 55.31);
        assert_relative_eq!(ab, ba, max_relative = 1e-12);
    }

    #[test]
    fn identical_points_are_zero_apart() {
        assert_relative_eq!(distance_km(25.27, 55.31, 25.27, 55.31), 0.0);
    }

    #[test]
    fn deira_to_union_is_under_two_km() {
        let d = distance_km(25.27, 55.31, 25.26, 55.30);
        assert!(d > 1.0 && d < 2.0, "got {d}");
    }

    #[test]
    fn nearest_stop_wins() {
        let deira = area("Deira", 40_000.0, 0.8, 25.27, 55.31);
        let stops = vec![
            stop("Far", 25.50, 55.60),
            stop("Union", 25.26, 55.30),
        ];
        let d = min_distance_to_transport(&deira, &stops);
        assert_relative_eq!(
            d,
            distance_km(25.27, 55.31, 25.26, 55.30),
            max_relative = 1e-12
        );
    }

    #[test]
    fn no_stops_means_infinite_distance() {
        let deira = area("Deira", 40_000.0, 0.8, 25.27, 55.31);
        assert_eq!(min_distance_to_transport(&deira, &[]), f64::INFINITY);
    }
}
