//! Routeplan CLI - command line tools for waypoint route planning.
//!
//! This crate provides the `routeplan` binary:
//! - plan: build a waypoint sequence, plan it and export the result
//! - measure: distance and bearing between two points
//! - geocode: resolve a place name or `lat,lng` query

pub mod input;
pub mod logging;

pub use input::{load_points_file, parse_point};
pub use logging::init_tracing;
