//! Core types shared by the cluster generator and its front ends.
//!
//! This crate provides the foundational pieces every generation step builds on:
//! - Cluster-space coordinates
//! - Deterministic, seedable random number generators

pub mod coords;
pub mod prng;

pub use coords::*;
pub use prng::*;

// Re-export commonly used types
pub use glam::DVec3;
pub use rand_core::{RngCore, SeedableRng};
