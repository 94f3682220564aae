//! Routeplan SDK - network edge for waypoint planning sessions
//!
//! Connects a `RouteSession` to the external route planning service and
//! geocoder, and writes exports to disk.

pub mod client;
pub mod config;
pub mod geocoder;
pub mod session;
pub mod sink;

pub use client::{HttpRoutePlanner, RoutePlanner};
pub use config::Config;
pub use geocoder::{Geocoder, NominatimGeocoder};
pub use routeplan_core::{PlanOutcome, PlannedRoute, RouteSession};
pub use session::SharedSession;
pub use sink::{ExportSink, FileSink, SinkError};
