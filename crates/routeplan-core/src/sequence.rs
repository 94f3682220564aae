//! Ordered, gap-free collection of user-placed waypoints.

use crate::bounds::is_within_bounds;
use crate::error::BoundsError;
use crate::models::{Coordinate, GeoBounds, Waypoint};
use uuid::Uuid;

/// Waypoints in travel order, validated against a fixed area.
///
/// After every mutation `order` runs `1..=len` in array order and ids are
/// unique.
#[derive(Debug, Clone)]
pub struct WaypointSequence {
    bounds: GeoBounds,
    waypoints: Vec<Waypoint>,
}

impl WaypointSequence {
    pub fn new(bounds: GeoBounds) -> Self {
        Self {
            bounds,
            waypoints: Vec::new(),
        }
    }

    pub fn bounds(&self) -> &GeoBounds {
        &self.bounds
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn coordinates(&self) -> Vec<Coordinate> {
        self.waypoints.iter().map(|wp| wp.coordinate).collect()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Waypoint> {
        self.waypoints.iter().find(|wp| wp.id == id)
    }

    /// Append a point after validating it against the bounds.
    pub fn add_point(&mut self, coordinate: Coordinate) -> Result<Waypoint, BoundsError> {
        if !is_within_bounds(coordinate, &self.bounds) {
            tracing::warn!(
                lat = coordinate.lat,
                lng = coordinate.lng,
                "Rejected out-of-bounds point"
            );
            return Err(BoundsError::OutOfBounds { coordinate });
        }

        let waypoint = Waypoint {
            id: Uuid::new_v4().to_string(),
            coordinate,
            order: self.waypoints.len() as u32 + 1,
        };
        tracing::debug!(id = %waypoint.id, order = waypoint.order, "Added waypoint");
        self.waypoints.push(waypoint.clone());
        Ok(waypoint)
    }

    /// Remove a point by id and renumber the rest. Unknown ids are ignored.
    ///
    /// Returns the removed waypoint, if any.
    pub fn remove_point(&mut self, id: &str) -> Option<Waypoint> {
        let index = self.waypoints.iter().position(|wp| wp.id == id)?;
        let removed = self.waypoints.remove(index);
        self.renumber();
        tracing::debug!(id = %removed.id, remaining = self.waypoints.len(), "Removed waypoint");
        Some(removed)
    }

    /// Replace the whole sequence with externally supplied points.
    ///
    /// All points are validated before anything changes; the first
    /// out-of-bounds point rejects the whole batch.
    pub fn replace_all<I>(&mut self, coordinates: I) -> Result<(), BoundsError>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let coordinates: Vec<Coordinate> = coordinates.into_iter().collect();
        if let Some((index, coordinate)) = coordinates
            .iter()
            .enumerate()
            .find(|(_, c)| !is_within_bounds(**c, &self.bounds))
        {
            tracing::warn!(index, "Rejected point set with out-of-bounds point");
            return Err(BoundsError::OutOfBoundsAt {
                index,
                coordinate: *coordinate,
            });
        }

        self.waypoints = coordinates
            .into_iter()
            .map(|coordinate| Waypoint {
                id: Uuid::new_v4().to_string(),
                coordinate,
                order: 0,
            })
            .collect();
        self.renumber();
        tracing::debug!(count = self.waypoints.len(), "Replaced waypoint sequence");
        Ok(())
    }

    fn renumber(&mut self) {
        for (index, waypoint) in self.waypoints.iter_mut().enumerate() {
            waypoint.order = index as u32 + 1;
        }
    }
}

impl Default for WaypointSequence {
    fn default() -> Self {
        Self::new(GeoBounds::default())
    }
}

/// Parse a JSON array of `{"lat": .., "lng": ..}` objects.
pub fn parse_coordinates_json(json: &str) -> Result<Vec<Coordinate>, serde_json::Error> {
    serde_json::from_str(json)
}
