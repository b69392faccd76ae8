//! Explorer configuration
//!
//! Settings for the page window, default page size, grid shape and dataset
//! location, loaded from a YAML (or JSON) file.

use crate::error::{Error, Result};
use crate::grid::GridLayout;
use crate::pagination::{RowsPerPage, WindowConfig};
use crate::types::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete explorer configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Page window shape
    #[serde(default)]
    pub window: WindowConfig,

    /// Rows per page when the URL does not say
    #[serde(default)]
    pub default_rows: RowsPerPage,

    /// Periodic grid shape
    #[serde(default)]
    pub grid: GridLayout,

    /// Dataset JSON file; the bundled sample is used when absent
    #[serde(default)]
    pub dataset: Option<PathBuf>,

    /// Log level for the command-line tool
    #[serde(default)]
    pub log_level: LogLevel,
}

impl ExplorerConfig {
    /// Validate value ranges serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.window.collapse_threshold == 0 {
            return Err(Error::invalid_config(
                "window.collapse_threshold",
                "must be at least 1",
            ));
        }

        self.grid.validate()
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load a configuration file
pub fn load_config(path: impl AsRef<Path>) -> Result<ExplorerConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::Io(e)
        }
    })?;
    load_config_from_str(&content)
}

/// Load a configuration from a YAML (or JSON) string
pub fn load_config_from_str(yaml: &str) -> Result<ExplorerConfig> {
    let config: ExplorerConfig = serde_yaml::from_str(yaml)?;

    config.validate()?;
    Ok(config)
}
