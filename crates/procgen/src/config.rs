//! Cluster generation parameters.

use crate::error::GenerationError;
use serde::{Deserialize, Serialize};

/// How probe points are drawn around the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeShape {
    /// Uniform direction at a uniform distance in `0..scale`. Probes crowd the
    /// centre, so inner rings fill first.
    #[default]
    Linear,
    /// Uniform on the sphere of radius `scale`. Only the outer rings are ever
    /// reached, which can leave too few lattice points for large clusters.
    Shell,
    /// Uniform inside the ball of radius `scale`.
    Volume,
}

/// What to do with stars still unassigned once every system is placed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeftoverStars {
    /// Leave them out of the cluster.
    #[default]
    Discard,
    /// Add each one to a random system other than the origin.
    Scatter,
}

/// Everything that shapes a generated cluster, apart from the random stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Total systems to place, origin included.
    #[serde(default = "default_systems")]
    pub systems: usize,
    /// Stars to distribute across the systems.
    #[serde(default = "default_stars")]
    pub stars: usize,
    /// Radius of the probe sphere, in light years.
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Valid probes compared before a system is placed.
    #[serde(default = "default_probes")]
    pub probes: usize,
    /// Smallest ring a placed system may sit on.
    #[serde(default = "default_min_ring")]
    pub min_ring: i64,
    /// Required separation for a system without stars.
    #[serde(default = "default_empty_clearance")]
    pub empty_clearance: f64,
    /// Base separation for a system with stars.
    #[serde(default = "default_star_clearance_base")]
    pub star_clearance_base: f64,
    /// Extra separation per star held.
    #[serde(default = "default_star_clearance_per_star")]
    pub star_clearance_per_star: f64,
    /// Rejected probes tolerated for a single system before giving up.
    #[serde(default = "default_max_rejections")]
    pub max_rejections: usize,
    #[serde(default)]
    pub probe_shape: ProbeShape,
    #[serde(default)]
    pub leftover_stars: LeftoverStars,
}

fn default_systems() -> usize {
    512
}
fn default_stars() -> usize {
    128
}
fn default_scale() -> f64 {
    15.0
}
fn default_probes() -> usize {
    15
}
fn default_min_ring() -> i64 {
    5
}
fn default_empty_clearance() -> f64 {
    1.0
}
fn default_star_clearance_base() -> f64 {
    2.0
}
fn default_star_clearance_per_star() -> f64 {
    2.0
}
fn default_max_rejections() -> usize {
    50_000
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            systems: default_systems(),
            stars: default_stars(),
            scale: default_scale(),
            probes: default_probes(),
            min_ring: default_min_ring(),
            empty_clearance: default_empty_clearance(),
            star_clearance_base: default_star_clearance_base(),
            star_clearance_per_star: default_star_clearance_per_star(),
            max_rejections: default_max_rejections(),
            probe_shape: ProbeShape::default(),
            leftover_stars: LeftoverStars::default(),
        }
    }
}

impl ClusterConfig {
    /// Default tuning with the given targets.
    pub fn new(systems: usize, stars: usize, scale: f64) -> Self {
        Self {
            systems,
            stars,
            scale,
            ..Default::default()
        }
    }

    /// Required separation for a system holding `stars` stars.
    pub fn clearance(&self, stars: usize) -> f64 {
        if stars == 0 {
            self.empty_clearance
        } else {
            self.star_clearance_base + self.star_clearance_per_star * stars as f64
        }
    }

    /// Reject targets the generator cannot work with. Feasibility of the
    /// layout itself is not checked here; see `max_rejections`.
    pub fn validate(&self) -> Result<(), GenerationError> {
        let invalid = |msg: String| -> Result<(), GenerationError> {
            Err(GenerationError::InvalidParameters(msg))
        };
        if self.systems == 0 {
            return invalid("system target must be positive".into());
        }
        if self.stars == 0 {
            return invalid("star target must be positive".into());
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return invalid(format!("scale must be positive and finite, got {}", self.scale));
        }
        if self.probes == 0 {
            return invalid("probe budget must be positive".into());
        }
        for (name, value) in [
            ("empty_clearance", self.empty_clearance),
            ("star_clearance_base", self.star_clearance_base),
            ("star_clearance_per_star", self.star_clearance_per_star),
        ] {
            if !value.is_finite() || value < 0.0 {
                return invalid(format!("{} must be non-negative and finite, got {}", name, value));
            }
        }
        Ok(())
    }
}
