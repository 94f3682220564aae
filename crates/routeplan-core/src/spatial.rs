//! Great-circle math for distance and bearing overlays.

use crate::models::Coordinate;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the great-circle distance between two points (Haversine formula).
///
/// # Returns
/// Distance in kilometres. Symmetric, and exactly 0 for identical points.
pub fn great_circle_distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let dphi = (b.lat - a.lat).to_radians();
    let dlambda = (b.lng - a.lng).to_radians();
    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Forward azimuth from `a` to `b` in degrees, 0 = north, 90 = east.
///
/// Normalized to `[0, 360)`. When `a == b` the direction is undefined and
/// the result is whatever `atan2(0, 0)` yields (0), still within range.
pub fn initial_bearing_degrees(a: Coordinate, b: Coordinate) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let delta_lambda = (b.lng - a.lng).to_radians();

    let y = delta_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    let degrees = y.atan2(x).to_degrees().rem_euclid(360.0);
    // rem_euclid can round a tiny negative angle up to exactly 360
    if degrees >= 360.0 {
        0.0
    } else {
        degrees
    }
}

/// Sum of haversine distances over consecutive points, in kilometres.
pub fn path_length_km(path: &[Coordinate]) -> f64 {
    path.windows(2)
        .map(|pair| great_circle_distance_km(pair[0], pair[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRAGUE: Coordinate = Coordinate::new(50.0755, 14.4378);
    const BRNO: Coordinate = Coordinate::new(49.1951, 16.6068);

    #[test]
    fn test_haversine_known_distance() {
        // ~111km between these points (1 degree latitude)
        let dist = great_circle_distance_km(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0));
        assert!((dist - 111.195).abs() < 0.01);
    }

    #[test]
    fn test_haversine_same_point() {
        assert_eq!(great_circle_distance_km(PRAGUE, PRAGUE), 0.0);
        assert_eq!(great_circle_distance_km(BRNO, BRNO), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let there = great_circle_distance_km(PRAGUE, BRNO);
        let back = great_circle_distance_km(BRNO, PRAGUE);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn prague_to_brno() {
        let dist = great_circle_distance_km(PRAGUE, BRNO);
        assert!((dist - 185.5).abs() < 2.0, "distance {dist}");

        let bearing = initial_bearing_degrees(PRAGUE, BRNO);
        assert!((bearing - 121.25).abs() < 0.1, "bearing {bearing}");
    }

    #[test]
    fn cardinal_bearings() {
        let origin = Coordinate::new(0.0, 0.0);
        let north = initial_bearing_degrees(origin, Coordinate::new(1.0, 0.0));
        let east = initial_bearing_degrees(origin, Coordinate::new(0.0, 1.0));
        let south = initial_bearing_degrees(origin, Coordinate::new(-1.0, 0.0));
        let west = initial_bearing_degrees(origin, Coordinate::new(0.0, -1.0));
        assert!(north.abs() < 1e-9);
        assert!((east - 90.0).abs() < 1e-9);
        assert!((south - 180.0).abs() < 1e-9);
        assert!((west - 270.0).abs() < 1e-9);
    }

    #[test]
    fn bearing_for_identical_points_stays_in_range() {
        let bearing = initial_bearing_degrees(PRAGUE, PRAGUE);
        assert!((0.0..360.0).contains(&bearing));
    }

    #[test]
    fn path_length_sums_segments() {
        let path = [PRAGUE, BRNO, PRAGUE];
        let expected = 2.0 * great_circle_distance_km(PRAGUE, BRNO);
        assert!((path_length_km(&path) - expected).abs() < 1e-9);
        assert_eq!(path_length_km(&path[..1]), 0.0);
    }
}
