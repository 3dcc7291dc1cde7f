//! Cluster-space coordinates, measured in light years from the cluster origin.

use glam::DVec3;
use serde::Serialize;
use std::fmt;

/// A point in cluster space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Coords {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coords {
    /// The cluster origin.
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn as_dvec3(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Coords) -> f64 {
        self.as_dvec3().distance(other.as_dvec3())
    }

    /// Distance from the cluster origin.
    pub fn length(&self) -> f64 {
        self.as_dvec3().length()
    }

    /// Component-wise rounding to the nearest integer (half away from zero).
    pub fn round_to_int(&self) -> Coords {
        self.as_dvec3().round().into()
    }

    /// Rounded components, each right-aligned in a three-wide column.
    pub fn xyz(&self) -> String {
        let r = self.round_to_int();
        format!("{:3}{:3}{:3}", r.x as i64, r.y as i64, r.z as i64)
    }
}

impl From<DVec3> for Coords {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Coords> for DVec3 {
    fn from(c: Coords) -> Self {
        c.as_dvec3()
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}
