//! Route session shared between UI events and in-flight plan requests.

use crate::client::RoutePlanner;
use routeplan_core::{
    format_route, BoundsError, Coordinate, ExportError, ExportKind, PlanOutcome, PlannedRoute,
    RouteExport, RouteSession, Waypoint,
};
use tokio::sync::{watch, Mutex};

/// A `RouteSession` behind one lock, plus a revision feed.
///
/// The lock is never held across the planner call. Any mutation published
/// while a request is in flight cancels that request.
#[derive(Debug)]
pub struct SharedSession {
    inner: Mutex<RouteSession>,
    revision: watch::Sender<u64>,
}

impl SharedSession {
    pub fn new(session: RouteSession) -> Self {
        let (revision, _) = watch::channel(session.revision());
        Self {
            inner: Mutex::new(session),
            revision,
        }
    }

    pub async fn add_point(&self, coordinate: Coordinate) -> Result<Waypoint, BoundsError> {
        let mut session = self.inner.lock().await;
        let result = session.add_point(coordinate);
        self.revision.send_replace(session.revision());
        result
    }

    pub async fn remove_point(&self, id: &str) -> Option<Waypoint> {
        let mut session = self.inner.lock().await;
        let removed = session.remove_point(id);
        self.revision.send_replace(session.revision());
        removed
    }

    pub async fn replace_all(&self, coordinates: Vec<Coordinate>) -> Result<(), BoundsError> {
        let mut session = self.inner.lock().await;
        let result = session.replace_all(coordinates);
        self.revision.send_replace(session.revision());
        result
    }

    pub async fn waypoints(&self) -> Vec<Waypoint> {
        self.inner.lock().await.waypoints().to_vec()
    }

    pub async fn route(&self) -> Option<PlannedRoute> {
        self.inner.lock().await.route().cloned()
    }

    pub async fn export(&self, kind: ExportKind) -> Result<RouteExport, ExportError> {
        let session = self.inner.lock().await;
        format_route(session.route(), kind)
    }

    /// Plan the current sequence and cache the result if still current.
    pub async fn plan<P>(&self, planner: &P) -> PlanOutcome
    where
        P: RoutePlanner + ?Sized,
    {
        let ticket = {
            let session = self.inner.lock().await;
            match session.begin_plan() {
                Some(ticket) => ticket,
                None => {
                    tracing::debug!("Not enough waypoints to plan");
                    return PlanOutcome::Skipped;
                }
            }
        };

        let mut changes = self.revision.subscribe();
        let result = tokio::select! {
            result = planner.plan(&ticket.request) => result,
            _ = revision_changed(&mut changes, ticket.revision) => {
                tracing::warn!(
                    revision = ticket.revision,
                    "Sequence changed, cancelling plan request"
                );
                return PlanOutcome::Cancelled;
            }
        };

        self.inner.lock().await.commit_plan(&ticket, result)
    }
}

async fn revision_changed(changes: &mut watch::Receiver<u64>, from: u64) {
    let _ = changes.wait_for(|revision| *revision != from).await;
}
