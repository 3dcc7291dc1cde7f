//! Renderers that turn a cluster view into bytes on disk or stdout.

use procgen::{ClusterRenderer, ClusterView, RenderError};
use serde::{Deserialize, Serialize};

/// Output encodings the CLI can write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Ron,
}

impl OutputFormat {
    pub fn renderer(self) -> Box<dyn ClusterRenderer> {
        match self {
            OutputFormat::Json => Box::new(JsonRenderer),
            OutputFormat::Ron => Box::new(RonRenderer),
        }
    }
}

/// Pretty-printed JSON, one object per system.
pub struct JsonRenderer;

impl ClusterRenderer for JsonRenderer {
    fn render(&self, view: &ClusterView) -> Result<Vec<u8>, RenderError> {
        let mut out = serde_json::to_vec_pretty(view)?;
        out.push(b'\n');
        Ok(out)
    }
}

/// Pretty-printed RON.
pub struct RonRenderer;

impl ClusterRenderer for RonRenderer {
    fn render(&self, view: &ClusterView) -> Result<Vec<u8>, RenderError> {
        let mut out = ron::ser::to_string_pretty(view, ron::ser::PrettyConfig::default())?;
        out.push('\n');
        Ok(out.into_bytes())
    }
}
