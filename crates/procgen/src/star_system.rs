//! Star systems and the stars they hold.

use engine_core::Coords;
use serde::Serialize;
use std::fmt;

/// Index of a system within its cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SystemId(pub usize);

impl SystemId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A star. Owned by its system; `system` points back at it by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Star {
    system: SystemId,
}

impl Star {
    pub(crate) fn new(system: SystemId) -> Self {
        Self { system }
    }

    /// The system this star belongs to.
    pub fn system(&self) -> SystemId {
        self.system
    }
}

/// A location in the cluster, possibly holding stars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarSystem {
    id: SystemId,
    /// Rounded distance from the cluster origin.
    ring: i64,
    coords: Coords,
    stars: Vec<Star>,
    /// Separation from every earlier system that was required when this one was placed.
    clearance: f64,
}

impl StarSystem {
    /// `coords` should already be on the integer lattice; the ring is derived from them.
    pub(crate) fn new(id: SystemId, coords: Coords, star_count: usize, clearance: f64) -> Self {
        Self {
            id,
            ring: coords.length().round() as i64,
            coords,
            stars: vec![Star::new(id); star_count],
            clearance,
        }
    }

    pub(crate) fn add_star(&mut self) {
        self.stars.push(Star::new(self.id));
    }

    pub fn id(&self) -> SystemId {
        self.id
    }

    pub fn ring(&self) -> i64 {
        self.ring
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn star_count(&self) -> usize {
        self.stars.len()
    }

    pub fn has_stars(&self) -> bool {
        !self.stars.is_empty()
    }

    pub fn clearance(&self) -> f64 {
        self.clearance
    }
}
