//! Error types for waypoint planning.

use crate::export::ExportKind;
use crate::models::Coordinate;
use thiserror::Error;

/// A candidate point was rejected by the bounds validator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoundsError {
    #[error("point {coordinate} is outside the allowed area")]
    OutOfBounds { coordinate: Coordinate },
    #[error("point #{index} ({coordinate}) is outside the allowed area")]
    OutOfBoundsAt { index: usize, coordinate: Coordinate },
}

/// Failure talking to, or interpreting, the route planning service.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanningError {
    #[error("planner request failed: {0}")]
    Transport(String),
    #[error("planner returned HTTP {0}")]
    Status(u16),
    #[error("planner response could not be decoded: {0}")]
    Decode(String),
    #[error("planner returned {received} points for {sent} waypoints")]
    PointCountMismatch { sent: usize, received: usize },
    #[error("planner returned an invalid route: {0}")]
    InvalidRoute(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    #[error("no route to export, plan a route first")]
    NoRouteToExport,
    #[error("{0} export is not supported")]
    Unsupported(ExportKind),
    #[error("unknown export format: {0}")]
    UnknownKind(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeocodeError {
    #[error("no location found for {0:?}")]
    NotFound(String),
    #[error("geocoding request failed: {0}")]
    Transport(String),
    #[error("geocoder returned HTTP {0}")]
    Status(u16),
    #[error("geocoding response could not be decoded: {0}")]
    Decode(String),
}
