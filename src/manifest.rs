//! Project manifest (identigrid.yaml) parsing.
//!
//! The manifest holds defaults for icon generation so repeated runs don't
//! need the same flags every time. Command-line flags override it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};

/// Manifest filename looked up in the working directory.
pub const MANIFEST_FILENAME: &str = "identigrid.yaml";

/// Grid edge used when neither the manifest nor the CLI sets one.
pub const DEFAULT_GRID: u32 = 4;

/// Project manifest loaded from identigrid.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Root directory icons are written under.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Default theme name (e.g. "full140", "blues27").
    pub theme: Option<String>,

    /// Default grid edge.
    pub grid: Option<u32>,

    /// Colour words never used.
    pub exclude: Vec<String>,

    /// PNG sizes written in addition to the built-in set.
    pub sizes: Vec<u32>,

    /// Prefix each icon directory with a timestamp.
    #[serde(default = "default_timestamp_dirs")]
    pub timestamp_dirs: bool,
}

fn default_output() -> PathBuf {
    PathBuf::from("output")
}

fn default_timestamp_dirs() -> bool {
    true
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output: default_output(),
            theme: None,
            grid: None,
            exclude: vec![],
            sizes: vec![],
            timestamp_dirs: default_timestamp_dirs(),
        }
    }
}

impl Manifest {
    /// Load manifest from an identigrid.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| IconError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })
    }

    /// Load an explicit manifest, or the one in `dir` if present, or defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = dir.join(MANIFEST_FILENAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Get the effective grid edge.
    pub fn effective_grid(&self) -> u32 {
        self.grid.unwrap_or(DEFAULT_GRID)
    }
}
