//! Generator configuration (cluster shape, random stream, output). Loaded from config.ron at startup.

use anyhow::{Context, Result};
use engine_core::PrngKind;
use procgen::ClusterConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::render::OutputFormat;

/// Persistent generator settings. Loaded from `config.ron` in the current directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WraithConfig {
    /// Cluster targets and placement tuning.
    #[serde(default)]
    pub cluster: ClusterConfig,
    /// Generator algorithm.
    #[serde(default)]
    pub prng: PrngKind,
    /// Fixed seed. Drawn from OS entropy when absent.
    #[serde(default)]
    pub seed: Option<i64>,
    /// How the cluster view is written out.
    #[serde(default)]
    pub format: OutputFormat,
    /// Output file. Standard output when absent.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl WraithConfig {
    /// Load config from `config.ron`. If the file is missing or invalid, returns default config.
    pub fn load() -> Self {
        let path = config_path();
        if let Ok(data) = std::fs::read_to_string(&path) {
            match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    /// Load config from an explicit path. Unlike [`WraithConfig::load`], failures are errors.
    pub fn load_from(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {:?}", path))?;
        ron::from_str(&data).with_context(|| format!("parsing config {:?}", path))
    }

    /// Save current config to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let s = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        std::fs::write(path, s).with_context(|| format!("writing config {:?}", path))
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join("config.ron")
}
