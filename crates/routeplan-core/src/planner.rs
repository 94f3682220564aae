//! Translation between waypoint sequences and the route planner wire format.
//!
//! The planner speaks `{x, y}` with `x` = longitude and `y` = latitude.
//! All axis swapping happens through the `PlannerPoint` conversions.

use crate::error::PlanningError;
use crate::models::{Coordinate, PlanRequest, PlanResponse, PlannedRoute, PlannerPoint, Waypoint};

/// Minimum number of waypoints for a plan request to be meaningful.
pub const MIN_PLAN_POINTS: usize = 2;

/// How strictly to check a planner response against the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponsePolicy {
    /// Reject routes whose point count differs from the number of waypoints sent.
    pub strict_point_count: bool,
}

impl Default for ResponsePolicy {
    fn default() -> Self {
        Self {
            strict_point_count: true,
        }
    }
}

/// Build the outbound request, keeping waypoint order.
pub fn build_plan_request(waypoints: &[Waypoint]) -> PlanRequest {
    PlanRequest {
        points: waypoints
            .iter()
            .map(|wp| PlannerPoint::from(wp.coordinate))
            .collect(),
    }
}

/// Turn a planner response into a `PlannedRoute`.
///
/// `sent` is the number of points in the request.
pub fn normalize_response(
    sent: usize,
    response: PlanResponse,
    policy: ResponsePolicy,
) -> Result<PlannedRoute, PlanningError> {
    let received = response.route.len();
    if received == 0 || (policy.strict_point_count && received != sent) {
        return Err(PlanningError::PointCountMismatch { sent, received });
    }

    if !response.total_length.is_finite() || response.total_length < 0.0 {
        return Err(PlanningError::InvalidRoute(format!(
            "total length {}",
            response.total_length
        )));
    }

    let path: Vec<Coordinate> = response.route.into_iter().map(Coordinate::from).collect();
    if let Some(index) = path
        .iter()
        .position(|c| !c.lat.is_finite() || !c.lng.is_finite())
    {
        return Err(PlanningError::InvalidRoute(format!(
            "non-finite coordinate at position {}",
            index + 1
        )));
    }

    Ok(PlannedRoute::from_path(path, response.total_length))
}
