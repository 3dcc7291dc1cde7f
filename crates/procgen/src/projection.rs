//! Flat, renderer-friendly view of a cluster.
//!
//! This is the only thing handed to whatever draws the cluster (an HTML
//! template, a JSON dump, a 3D viewer). No markup is produced here.

use crate::cluster::Cluster;
use crate::error::{GenerationError, RenderError};
use crate::star_system::StarSystem;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display color, keyed on how many stars a system holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StarColor {
    Red,
    Teal,
    Blue,
    Green,
    Silver,
    Grey,
}

impl StarColor {
    pub fn for_star_count(stars: usize) -> Self {
        match stars {
            5 => StarColor::Red,
            4 => StarColor::Teal,
            3 => StarColor::Blue,
            2 => StarColor::Green,
            1 => StarColor::Silver,
            _ => StarColor::Grey,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StarColor::Red => "red",
            StarColor::Teal => "teal",
            StarColor::Blue => "blue",
            StarColor::Green => "green",
            StarColor::Silver => "silver",
            StarColor::Grey => "grey",
        }
    }
}

impl fmt::Display for StarColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One system, flattened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedSystem {
    pub ring: i64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub star_count: usize,
    pub color: StarColor,
}

impl From<&StarSystem> for ProjectedSystem {
    fn from(sys: &StarSystem) -> Self {
        let c = sys.coords();
        Self {
            ring: sys.ring(),
            x: c.x,
            y: c.y,
            z: c.z,
            star_count: sys.star_count(),
            color: StarColor::for_star_count(sys.star_count()),
        }
    }
}

/// Root data handed to a renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterView {
    pub systems: Vec<ProjectedSystem>,
}

/// Turns a [`ClusterView`] into bytes (HTML, JSON, ...).
pub trait ClusterRenderer {
    fn render(&self, view: &ClusterView) -> Result<Vec<u8>, RenderError>;
}

/// Flatten every system of the cluster, in placement order.
pub fn project(cluster: &Cluster) -> Vec<ProjectedSystem> {
    cluster.systems().iter().map(ProjectedSystem::from).collect()
}

impl Cluster {
    pub fn view(&self) -> ClusterView {
        ClusterView {
            systems: project(self),
        }
    }

    pub fn render(&self, renderer: &dyn ClusterRenderer) -> Result<Vec<u8>, GenerationError> {
        let view = self.view();
        log::debug!("rendering {} systems", view.systems.len());
        renderer.render(&view).map_err(GenerationError::Render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::Coords;

    #[test]
    fn color_table() {
        assert_eq!(StarColor::for_star_count(0), StarColor::Grey);
        assert_eq!(StarColor::for_star_count(1), StarColor::Silver);
        assert_eq!(StarColor::for_star_count(2), StarColor::Green);
        assert_eq!(StarColor::for_star_count(3), StarColor::Blue);
        assert_eq!(StarColor::for_star_count(4), StarColor::Teal);
        assert_eq!(StarColor::for_star_count(5), StarColor::Red);
        assert_eq!(StarColor::for_star_count(6), StarColor::Grey);
    }

    #[test]
    fn color_names_are_lowercase() {
        assert_eq!(StarColor::Silver.to_string(), "silver");
        assert_eq!(serde_json::to_string(&StarColor::Red).unwrap(), "\"red\"");
    }

    #[test]
    fn projection_keeps_order_and_fields() {
        let mut cluster = Cluster::with_origin();
        cluster.push_system(Coords::new(0.0, 12.0, -9.0), 3, 8.0);
        let view = cluster.view();
        assert_eq!(view.systems.len(), 2);
        assert_eq!(view.systems[0].color, StarColor::Grey);
        assert_eq!(view.systems[0].ring, 0);
        let p = &view.systems[1];
        assert_eq!((p.x, p.y, p.z), (0.0, 12.0, -9.0));
        assert_eq!(p.ring, 15);
        assert_eq!(p.star_count, 3);
        assert_eq!(p.color, StarColor::Blue);
    }

    #[test]
    fn six_star_system_projects_grey() {
        let mut cluster = Cluster::with_origin();
        let id = cluster.push_system(Coords::new(9.0, 0.0, 0.0), 5, 12.0);
        if let Some(sys) = cluster.system_mut(id) {
            sys.add_star();
        }
        assert_eq!(project(&cluster)[1].color, StarColor::Grey);
    }

    struct Failing;

    impl ClusterRenderer for Failing {
        fn render(&self, _view: &ClusterView) -> Result<Vec<u8>, RenderError> {
            Err("template missing".into())
        }
    }

    struct CountLines;

    impl ClusterRenderer for CountLines {
        fn render(&self, view: &ClusterView) -> Result<Vec<u8>, RenderError> {
            Ok(view
                .systems
                .iter()
                .map(|s| format!("{} {}\n", s.ring, s.color))
                .collect::<String>()
                .into_bytes())
        }
    }

    #[test]
    fn render_passes_view_through() {
        let cluster = Cluster::with_origin();
        let out = cluster.render(&CountLines).unwrap();
        assert_eq!(out, b"0 grey\n");
    }

    #[test]
    fn render_failure_is_propagated() {
        let err = Cluster::with_origin().render(&Failing).unwrap_err();
        assert!(matches!(err, GenerationError::Render(_)));
        assert!(err.to_string().contains("template missing"));
    }
}
