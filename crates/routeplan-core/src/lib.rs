//! Waypoint sequencing, geodesy and route export for a bounded planning area.

pub mod bounds;
pub mod error;
pub mod export;
pub mod geocode;
pub mod models;
pub mod planner;
pub mod sequence;
pub mod session;
pub mod spatial;

pub use bounds::is_within_bounds;
pub use error::{BoundsError, ExportError, GeocodeError, PlanningError};
pub use export::{format_route, ExportKind, RouteExport};
pub use geocode::parse_coordinate_query;
pub use models::{
    Coordinate, GeoBounds, PlanRequest, PlanResponse, PlannedRoute, PlannerPoint, RouteSummary,
    Waypoint,
};
pub use planner::{build_plan_request, normalize_response, ResponsePolicy, MIN_PLAN_POINTS};
pub use sequence::{parse_coordinates_json, WaypointSequence};
pub use session::{PlanOutcome, PlanTicket, RouteSession};
pub use spatial::{great_circle_distance_km, initial_bearing_degrees, path_length_km};
