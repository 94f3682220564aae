//! Parsing of user-supplied points.

use anyhow::{Context, Result};
use routeplan_core::{parse_coordinate_query, parse_coordinates_json, Coordinate};
use std::path::Path;

/// Parse a `LAT,LNG` argument.
pub fn parse_point(value: &str) -> Result<Coordinate, String> {
    parse_coordinate_query(value).ok_or_else(|| format!("expected LAT,LNG, got {value:?}"))
}

/// Read a JSON array of `{"lat": .., "lng": ..}` objects.
pub fn load_points_file(path: &Path) -> Result<Vec<Coordinate>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_coordinates_json(&json)
        .with_context(|| format!("Invalid point list in {}", path.display()))
}
