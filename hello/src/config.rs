//! Program inputs: the greeting name and the parity bound.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_NAME: &str = "world";
pub const DEFAULT_BOUND: i64 = 5;

/// Inputs for a single run (TOML).
///
/// Missing fields take their defaults, so an empty file is valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HelloConfig {
    /// Name interpolated into the greeting.
    pub name: String,

    /// Exclusive upper limit of the parity range `[0, bound)`.
    pub bound: i64,
}

impl Default for HelloConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            bound: DEFAULT_BOUND,
        }
    }
}

impl HelloConfig {
    /// Apply command-line overrides on top of this config.
    pub fn with_overrides(mut self, name: Option<String>, bound: Option<i64>) -> Self {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(bound) = bound {
            self.bound = bound;
        }
        self
    }
}

/// Load config from a TOML file.
pub fn load_config(path: &Path) -> Result<HelloConfig> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: HelloConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

/// Resolve the effective config: CLI flag, then config file, then default.
pub fn resolve_config(
    path: Option<&Path>,
    name: Option<String>,
    bound: Option<i64>,
) -> Result<HelloConfig> {
    let base = match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config file");
            load_config(path)?
        }
        None => HelloConfig::default(),
    };
    let cfg = base.with_overrides(name, bound);
    debug!(name_len = cfg.name.len(), bound = cfg.bound, "config resolved");
    Ok(cfg)
}
