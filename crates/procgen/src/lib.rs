//! Procedural generation of star clusters: placement, star assignment, and the
//! flat view handed to renderers.

pub mod cluster;
pub mod config;
pub mod error;
pub mod placement;
pub mod projection;
pub mod sampling;
pub mod star_system;

pub use cluster::*;
pub use config::*;
pub use error::*;
pub use placement::*;
pub use projection::*;
pub use sampling::*;
pub use star_system::*;
