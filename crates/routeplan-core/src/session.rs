//! Session-scoped owner of the waypoint sequence and its planned route.

use crate::error::{BoundsError, PlanningError};
use crate::models::{Coordinate, GeoBounds, PlanRequest, PlanResponse, PlannedRoute, Waypoint};
use crate::planner::{build_plan_request, normalize_response, ResponsePolicy, MIN_PLAN_POINTS};
use crate::sequence::WaypointSequence;

/// Snapshot of the sequence taken when a plan request starts.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanTicket {
    pub revision: u64,
    pub request: PlanRequest,
}

/// What happened to a plan result when it was handed back to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    /// Fewer than two waypoints; nothing was requested.
    Skipped,
    /// The route was cached.
    Applied(PlannedRoute),
    /// The sequence changed while the request was in flight; result dropped.
    Stale,
    /// The request was aborted because the sequence changed.
    Cancelled,
    /// The planner failed; any earlier cached route is kept.
    Failed(PlanningError),
}

/// Waypoints plus the route cached for them.
///
/// Every mutation bumps `revision` and drops the cached route, so a plan
/// result can only be applied against the exact sequence it was built from.
#[derive(Debug, Clone)]
pub struct RouteSession {
    sequence: WaypointSequence,
    route: Option<PlannedRoute>,
    revision: u64,
    policy: ResponsePolicy,
}

impl RouteSession {
    pub fn new(bounds: GeoBounds) -> Self {
        Self::with_policy(bounds, ResponsePolicy::default())
    }

    pub fn with_policy(bounds: GeoBounds, policy: ResponsePolicy) -> Self {
        Self {
            sequence: WaypointSequence::new(bounds),
            route: None,
            revision: 0,
            policy,
        }
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        self.sequence.waypoints()
    }

    pub fn sequence(&self) -> &WaypointSequence {
        &self.sequence
    }

    pub fn route(&self) -> Option<&PlannedRoute> {
        self.route.as_ref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn can_plan(&self) -> bool {
        self.sequence.len() >= MIN_PLAN_POINTS
    }

    pub fn add_point(&mut self, coordinate: Coordinate) -> Result<Waypoint, BoundsError> {
        let waypoint = self.sequence.add_point(coordinate)?;
        self.invalidate();
        Ok(waypoint)
    }

    /// Remove a waypoint. The cached route is dropped even if `id` is unknown.
    pub fn remove_point(&mut self, id: &str) -> Option<Waypoint> {
        let removed = self.sequence.remove_point(id);
        self.invalidate();
        removed
    }

    pub fn replace_all<I>(&mut self, coordinates: I) -> Result<(), BoundsError>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        self.sequence.replace_all(coordinates)?;
        self.invalidate();
        Ok(())
    }

    /// Snapshot the current sequence for a plan request.
    ///
    /// Returns `None` below the two-point minimum.
    pub fn begin_plan(&self) -> Option<PlanTicket> {
        if !self.can_plan() {
            return None;
        }
        Some(PlanTicket {
            revision: self.revision,
            request: build_plan_request(self.sequence.waypoints()),
        })
    }

    /// Hand a planner result back to the session.
    pub fn commit_plan(
        &mut self,
        ticket: &PlanTicket,
        result: Result<PlanResponse, PlanningError>,
    ) -> PlanOutcome {
        if ticket.revision != self.revision {
            tracing::warn!(
                ticket = ticket.revision,
                current = self.revision,
                "Dropping plan computed for an outdated sequence"
            );
            return PlanOutcome::Stale;
        }

        let normalized = result.and_then(|response| {
            normalize_response(ticket.request.points.len(), response, self.policy)
        });

        match normalized {
            Ok(route) => {
                tracing::info!(
                    points = route.points.len(),
                    total_length_km = route.total_length,
                    "Route planned"
                );
                self.route = Some(route.clone());
                PlanOutcome::Applied(route)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Route planning failed");
                PlanOutcome::Failed(err)
            }
        }
    }

    fn invalidate(&mut self) {
        self.revision += 1;
        self.route = None;
    }
}

impl Default for RouteSession {
    fn default() -> Self {
        Self::new(GeoBounds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlannerPoint;

    fn echo_response(ticket: &PlanTicket) -> PlanResponse {
        PlanResponse {
            route: ticket.request.points.clone(),
            total_length: 185.5,
        }
    }

    fn planned_session() -> RouteSession {
        let mut session = RouteSession::default();
        session.add_point(Coordinate::new(50.08, 14.44)).unwrap();
        session.add_point(Coordinate::new(49.20, 16.61)).unwrap();
        let ticket = session.begin_plan().unwrap();
        let response = echo_response(&ticket);
        assert!(matches!(session.commit_plan(&ticket, Ok(response)), PlanOutcome::Applied(_)));
        session
    }

    #[test]
    fn begin_plan_needs_two_points() {
        let mut session = RouteSession::default();
        assert!(session.begin_plan().is_none());
        session.add_point(Coordinate::new(50.08, 14.44)).unwrap();
        assert!(session.begin_plan().is_none());
        session.add_point(Coordinate::new(49.20, 16.61)).unwrap();

        let ticket = session.begin_plan().unwrap();
        assert_eq!(
            ticket.request.points,
            vec![PlannerPoint { x: 14.44, y: 50.08 }, PlannerPoint { x: 16.61, y: 49.20 }]
        );
    }

    #[test]
    fn successful_plan_is_cached() {
        let session = planned_session();
        let route = session.route().unwrap();
        assert_eq!(route.total_length, 185.5);
        assert_eq!(route.points[1].coordinate, Coordinate::new(49.20, 16.61));
    }

    #[test]
    fn add_and_remove_invalidate_route() {
        let mut session = planned_session();
        session.add_point(Coordinate::new(49.5, 15.0)).unwrap();
        assert!(session.route().is_none());

        let mut session = planned_session();
        session.remove_point("not-there");
        assert!(session.route().is_none());
    }

    #[test]
    fn rejected_point_keeps_route() {
        let mut session = planned_session();
        let revision = session.revision();
        assert!(session.add_point(Coordinate::new(10.0, 10.0)).is_err());
        assert!(session.route().is_some());
        assert_eq!(session.revision(), revision);
    }

    #[test]
    fn result_for_mutated_sequence_is_stale() {
        let mut session = RouteSession::default();
        session.add_point(Coordinate::new(50.08, 14.44)).unwrap();
        session.add_point(Coordinate::new(49.20, 16.61)).unwrap();
        let ticket = session.begin_plan().unwrap();

        session.add_point(Coordinate::new(49.5, 15.0)).unwrap();

        let outcome = session.commit_plan(&ticket, Ok(echo_response(&ticket)));
        assert_eq!(outcome, PlanOutcome::Stale);
        assert!(session.route().is_none());
    }

    #[test]
    fn failure_keeps_previous_route() {
        let mut session = planned_session();
        let before = session.route().cloned();
        let ticket = session.begin_plan().unwrap();

        let outcome = session.commit_plan(&ticket, Err(PlanningError::Status(502)));
        assert_eq!(outcome, PlanOutcome::Failed(PlanningError::Status(502)));
        assert_eq!(session.route().cloned(), before);
    }

    #[test]
    fn mismatched_response_fails() {
        let mut session = planned_session();
        let ticket = session.begin_plan().unwrap();
        let response = PlanResponse {
            route: vec![PlannerPoint { x: 14.44, y: 50.08 }],
            total_length: 1.0,
        };
        assert!(matches!(
            session.commit_plan(&ticket, Ok(response)),
            PlanOutcome::Failed(PlanningError::PointCountMismatch { sent: 2, received: 1 })
        ));
    }
}
