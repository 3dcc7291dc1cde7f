//! Random probe points around the cluster origin.

use crate::config::ProbeShape;
use engine_core::{Coords, DVec3};
use rand::Rng;
use std::f64::consts::TAU;

/// Draw one probe point for the given shape and radius.
pub fn sample_probe<R: Rng + ?Sized>(rng: &mut R, shape: ProbeShape, scale: f64) -> Coords {
    let dir = unit_sphere_point(rng);
    let radius = match shape {
        ProbeShape::Linear => scale * rng.gen::<f64>(),
        ProbeShape::Shell => scale,
        ProbeShape::Volume => scale * rng.gen::<f64>().cbrt(),
    };
    (dir * radius).into()
}

/// Uniform point on the unit sphere: azimuth from one draw, polar angle by
/// inverting the cosine of a second so the poles are not oversampled.
pub fn unit_sphere_point<R: Rng + ?Sized>(rng: &mut R) -> DVec3 {
    let u: f64 = rng.gen();
    let v: f64 = rng.gen();
    let theta = u * TAU;
    let phi = (2.0 * v - 1.0).acos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    DVec3::new(sin_phi * cos_theta, sin_phi * sin_theta, cos_phi)
}
