//! Geographic boundary checks.

use crate::models::{Coordinate, GeoBounds};

/// Inclusive containment test on all four edges.
///
/// NaN components compare false and are therefore never inside.
pub fn is_within_bounds(coordinate: Coordinate, bounds: &GeoBounds) -> bool {
    coordinate.lat >= bounds.south
        && coordinate.lat <= bounds.north
        && coordinate.lng >= bounds.west
        && coordinate.lng <= bounds.east
}

#[cfg(test)]
mod tests {
    use super::*;

    const CZ: GeoBounds = GeoBounds::CZECH_REPUBLIC;

    #[test]
    fn accepts_interior_point() {
        assert!(is_within_bounds(Coordinate::new(50.0755, 14.4378), &CZ));
    }

    #[test]
    fn edges_are_inclusive() {
        assert!(is_within_bounds(Coordinate::new(51.1, 18.9), &CZ));
        assert!(is_within_bounds(Coordinate::new(48.5, 12.1), &CZ));
        assert!(is_within_bounds(Coordinate::new(48.5, 18.9), &CZ));
    }

    #[test]
    fn rejects_points_outside_each_edge() {
        assert!(!is_within_bounds(Coordinate::new(51.2, 15.0), &CZ));
        assert!(!is_within_bounds(Coordinate::new(48.4, 15.0), &CZ));
        assert!(!is_within_bounds(Coordinate::new(50.0, 19.0), &CZ));
        assert!(!is_within_bounds(Coordinate::new(50.0, 12.0), &CZ));
    }

    #[test]
    fn nan_is_never_inside() {
        assert!(!is_within_bounds(Coordinate::new(f64::NAN, 15.0), &CZ));
        assert!(!is_within_bounds(Coordinate::new(50.0, f64::NAN), &CZ));
    }

    #[test]
    fn uses_injected_bounds() {
        let vienna_box = GeoBounds::new(48.4, 48.1, 16.6, 16.2);
        let vienna = Coordinate::new(48.2082, 16.3738);
        assert!(is_within_bounds(vienna, &vienna_box));
        assert!(!is_within_bounds(vienna, &CZ));
    }
}
