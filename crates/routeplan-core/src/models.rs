//! Core data models for waypoint planning.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", plain_degrees(self.lat), plain_degrees(self.lng))
    }
}

/// Shortest round-trip rendering of a degree value, with `-0` printed as `0`.
pub(crate) fn plain_degrees(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// A user-placed point in an ordered sequence.
///
/// `order` is 1-based and always matches the waypoint's position in its
/// sequence. `id` never changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub id: String,
    pub coordinate: Coordinate,
    pub order: u32,
}

/// Axis-aligned lat/lng rectangle used to reject out-of-area points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl GeoBounds {
    /// Extent of the Czech Republic.
    pub const CZECH_REPUBLIC: GeoBounds = GeoBounds {
        north: 51.1,
        south: 48.5,
        east: 18.9,
        west: 12.1,
    };

    pub const fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Parse `south,west,north,east`.
    pub fn parse(value: &str) -> Option<Self> {
        let parts: Vec<f64> = value
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .ok()?;
        match parts.as_slice() {
            [south, west, north, east] => Some(Self::new(*north, *south, *east, *west)),
            _ => None,
        }
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        crate::bounds::is_within_bounds(coordinate, self)
    }
}

impl Default for GeoBounds {
    fn default() -> Self {
        Self::CZECH_REPUBLIC
    }
}

/// Path returned by the external planner, normalized to lat/lng.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedRoute {
    pub points: Vec<Waypoint>,
    /// Kilometres, as reported by the planner.
    pub total_length: f64,
    pub coordinates: Vec<Coordinate>,
}

/// Aggregate numbers for a planned route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteSummary {
    pub point_count: usize,
    pub reported_length_km: f64,
    pub path_length_km: f64,
}

impl PlannedRoute {
    /// Build a route from an ordered path, numbering points from 1.
    pub fn from_path(path: Vec<Coordinate>, total_length: f64) -> Self {
        let points = path
            .iter()
            .enumerate()
            .map(|(index, coordinate)| {
                let order = index as u32 + 1;
                Waypoint {
                    id: order.to_string(),
                    coordinate: *coordinate,
                    order,
                }
            })
            .collect();

        Self {
            points,
            total_length,
            coordinates: path,
        }
    }

    pub fn summary(&self) -> RouteSummary {
        RouteSummary {
            point_count: self.coordinates.len(),
            reported_length_km: self.total_length,
            path_length_km: crate::spatial::path_length_km(&self.coordinates),
        }
    }
}

/// Point in the planner's wire schema: `x` is longitude, `y` is latitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannerPoint {
    pub x: f64,
    pub y: f64,
}

impl From<Coordinate> for PlannerPoint {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            x: coordinate.lng,
            y: coordinate.lat,
        }
    }
}

impl From<PlannerPoint> for Coordinate {
    fn from(point: PlannerPoint) -> Self {
        Self {
            lat: point.y,
            lng: point.x,
        }
    }
}

/// Body sent to the route planning service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub points: Vec<PlannerPoint>,
}

/// Successful response from the route planning service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub route: Vec<PlannerPoint>,
    pub total_length: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planner_point_swaps_axes_both_ways() {
        let prague = Coordinate::new(50.08, 14.44);
        let point = PlannerPoint::from(prague);
        assert_eq!(point, PlannerPoint { x: 14.44, y: 50.08 });
        assert_eq!(Coordinate::from(point), prague);
    }

    #[test]
    fn plan_request_serializes_wire_shape() {
        let request = PlanRequest {
            points: vec![PlannerPoint { x: 14.44, y: 50.08 }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "points": [{ "x": 14.44, "y": 50.08 }] }));
    }

    #[test]
    fn plan_response_reads_camel_case_total() {
        let body = r#"{"route":[{"x":14.44,"y":50.08}],"totalLength":12.34}"#;
        let response: PlanResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.total_length, 12.34);
        assert_eq!(response.route.len(), 1);
    }

    #[test]
    fn bounds_parse_takes_south_west_north_east() {
        let bounds = GeoBounds::parse("48.5, 12.1, 51.1, 18.9").unwrap();
        assert_eq!(bounds, GeoBounds::CZECH_REPUBLIC);
        assert!(GeoBounds::parse("48.5,12.1,51.1").is_none());
        assert!(GeoBounds::parse("a,b,c,d").is_none());
    }

    #[test]
    fn coordinate_display_drops_negative_zero() {
        assert_eq!(Coordinate::new(-0.0, 14.5).to_string(), "0, 14.5");
        assert_eq!(Coordinate::new(50.08, 14.44).to_string(), "50.08, 14.44");
    }

    #[test]
    fn from_path_numbers_points_by_position() {
        let route = PlannedRoute::from_path(
            vec![Coordinate::new(50.0, 14.0), Coordinate::new(49.0, 16.0)],
            10.0,
        );
        let orders: Vec<u32> = route.points.iter().map(|p| p.order).collect();
        assert_eq!(orders, vec![1, 2]);
        assert_eq!(route.points[1].coordinate, route.coordinates[1]);
    }
}
