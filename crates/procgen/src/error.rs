//! Errors returned by cluster generation.

use thiserror::Error;

/// Opaque failure from a [`crate::ClusterRenderer`].
pub type RenderError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    #[error(
        "unsatisfiable constraints: placed {placed} of {target} systems, \
         gave up after {rejections} rejected probes"
    )]
    UnsatisfiableConstraints {
        placed: usize,
        target: usize,
        rejections: usize,
    },

    #[error("render failed: {0}")]
    Render(#[source] RenderError),
}
