//! `approx.toml`

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use common::Tolerance;

/// Read from the working directory when no config is given explicitly
pub const DEFAULT_CONFIG: &str = "approx.toml";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub tolerance: Tolerance,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            color: true,
        }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("could not deserialize config")
    }

    /// Read the config at `path`, or `approx.toml` if it exists, or fall back to the defaults.
    pub fn read(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("could not open {}", path.display()))?;
                Self::from_toml(&text).with_context(|| format!("invalid config {}", path.display()))
            }
            None => Self::read_or_default(Path::new(DEFAULT_CONFIG)),
        }
    }

    /// Like [`Config::read`] with an explicit path, but a missing file is not an error.
    pub fn read_or_default(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                Self::from_toml(&text).with_context(|| format!("invalid config {}", path.display()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => {
                Err(anyhow::Error::from(e).context(format!("could not open {}", path.display())))
            }
        }
    }
}
