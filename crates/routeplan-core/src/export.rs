//! Text renderings of a planned route.

use crate::error::ExportError;
use crate::models::{Coordinate, PlannedRoute};
use crate::spatial::{great_circle_distance_km, initial_bearing_degrees};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    /// One `lat, lng` line per path point.
    Coordinates,
    /// Start point followed by distance/bearing legs.
    Vectors,
    /// Rendered map image.
    Map,
}

impl ExportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::Coordinates => "coordinates",
            ExportKind::Vectors => "vectors",
            ExportKind::Map => "map",
        }
    }

    /// Suggested download name, if the kind produces text.
    pub fn filename(&self) -> Option<&'static str> {
        match self {
            ExportKind::Coordinates => Some("route_coordinates.txt"),
            ExportKind::Vectors => Some("route_vectors.txt"),
            ExportKind::Map => None,
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportKind {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "coordinates" => Ok(ExportKind::Coordinates),
            "vectors" => Ok(ExportKind::Vectors),
            "map" => Ok(ExportKind::Map),
            other => Err(ExportError::UnknownKind(other.to_string())),
        }
    }
}

/// Rendered export content plus the filename to offer for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteExport {
    pub kind: ExportKind,
    pub filename: String,
    pub content: String,
}

/// Render `route` in the requested format.
///
/// Lines are joined with `\n` and there is no trailing newline.
pub fn format_route(
    route: Option<&PlannedRoute>,
    kind: ExportKind,
) -> Result<RouteExport, ExportError> {
    let route = route.ok_or(ExportError::NoRouteToExport)?;

    let content = match kind {
        ExportKind::Coordinates => coordinate_lines(&route.coordinates),
        ExportKind::Vectors => vector_lines(&route.coordinates),
        ExportKind::Map => return Err(ExportError::Unsupported(kind)),
    };

    Ok(RouteExport {
        kind,
        filename: kind.filename().unwrap_or_default().to_string(),
        content: content.join("\n"),
    })
}

fn coordinate_lines(path: &[Coordinate]) -> Vec<String> {
    path.iter().map(ToString::to_string).collect()
}

fn vector_lines(path: &[Coordinate]) -> Vec<String> {
    let Some(start) = path.first() else {
        return Vec::new();
    };

    let mut lines = Vec::with_capacity(path.len());
    lines.push(format!("Start: {start}"));
    for (index, pair) in path.windows(2).enumerate() {
        let distance = great_circle_distance_km(pair[0], pair[1]);
        let bearing = initial_bearing_degrees(pair[0], pair[1]);
        lines.push(format!(
            "Vector {}: Distance: {:.2}km, Bearing: {:.1}°",
            index + 1,
            distance,
            bearing
        ));
    }
    lines
}
