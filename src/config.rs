//! Configuration schema for docfill.
//!
//! Configuration is read from a YAML file; every field is optional and
//! command-line flags override file values.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::annotate::VetoGate;
use crate::detect::DetectorKind;
use crate::synth::Strategy;

/// Conventional Maven/Gradle source root.
pub const DEFAULT_ROOT: &str = "src/main/java";

/// Default config file names to search for.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["docfill.yaml", ".docfill.yaml"];

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Directory (or single file) to annotate
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Comment synthesis strategy
    #[serde(default)]
    pub strategy: Strategy,
    /// Declaration detection strategy
    #[serde(default)]
    pub detector: DetectorKind,
    /// Seed for the randomized strategy (entropy when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Plan and report without writing files
    #[serde(default)]
    pub dry_run: bool,
    /// Process files in parallel
    #[serde(default)]
    pub parallel: bool,
    /// Glob patterns for paths to skip (e.g., "**/generated/**")
    #[serde(default)]
    pub excluded_paths: Vec<String>,
    #[serde(default)]
    pub veto: VetoGate,
}

fn default_root() -> PathBuf {
    PathBuf::from(DEFAULT_ROOT)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: default_root(),
            strategy: Strategy::default(),
            detector: DetectorKind::default(),
            seed: None,
            dry_run: false,
            parallel: false,
            excluded_paths: Vec::new(),
            veto: VetoGate::default(),
        }
    }
}

impl Config {
    /// Parse configuration from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("reading {}: {}", path.as_ref().display(), e))?;
        Self::parse_str(&content)
    }

    /// Parse configuration from YAML text. Empty text yields the defaults.
    pub fn parse_str(content: &str) -> anyhow::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Find a config file in `dir`, if one exists.
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        DEFAULT_CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }
}
