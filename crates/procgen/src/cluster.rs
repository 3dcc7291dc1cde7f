//! The cluster: every star system produced by one generation run.

use crate::star_system::{StarSystem, SystemId};
use engine_core::Coords;
use serde::Serialize;

/// A generated cluster. The first system is always the origin.
///
/// Read-only once generation returns it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster {
    systems: Vec<StarSystem>,
}

impl Cluster {
    /// A cluster holding only the empty origin system.
    pub(crate) fn with_origin() -> Self {
        Self {
            systems: vec![StarSystem::new(SystemId(0), Coords::ORIGIN, 0, 0.0)],
        }
    }

    /// Append a system at `coords` and return its id.
    pub(crate) fn push_system(&mut self, coords: Coords, star_count: usize, clearance: f64) -> SystemId {
        let id = SystemId(self.systems.len());
        self.systems
            .push(StarSystem::new(id, coords, star_count, clearance));
        id
    }

    pub(crate) fn system_mut(&mut self, id: SystemId) -> Option<&mut StarSystem> {
        self.systems.get_mut(id.0)
    }

    pub fn systems(&self) -> &[StarSystem] {
        &self.systems
    }

    pub fn system(&self, id: SystemId) -> Option<&StarSystem> {
        self.systems.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    pub fn total_stars(&self) -> usize {
        self.systems.iter().map(StarSystem::star_count).sum()
    }

    /// Minimum distance from `pos` to any system (0.0 for an empty cluster).
    pub fn min_distance(&self, pos: Coords) -> f64 {
        min_distance(pos, &self.systems)
    }

    /// The system nearest to `pos`, with its distance.
    pub fn nearest_system(&self, pos: Coords) -> Option<(SystemId, f64)> {
        self.systems
            .iter()
            .map(|sys| (sys.id(), pos.distance(sys.coords())))
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Systems within `radius` of `pos`, in cluster order.
    pub fn systems_near(&self, pos: Coords, radius: f64) -> Vec<(SystemId, f64)> {
        self.systems
            .iter()
            .filter_map(|sys| {
                let dist = pos.distance(sys.coords());
                if dist <= radius {
                    Some((sys.id(), dist))
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Minimum distance from `pos` to the coordinates of any of `systems`.
///
/// Returns 0.0 when `systems` is empty. That is indistinguishable from a
/// probe sitting exactly on a system, so callers that care must check for an
/// empty slice first. Generation never hits this: the origin is always present.
pub fn min_distance(pos: Coords, systems: &[StarSystem]) -> f64 {
    systems
        .iter()
        .map(|sys| pos.distance(sys.coords()))
        .reduce(f64::min)
        .unwrap_or(0.0)
}
