//! GradeTracker configuration types and loading

use eyre::{Context, Result};
use gradestore::Metric;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default number of decimals shown for metric values
pub const DEFAULT_PRECISION: usize = 2;

/// Main GradeTracker configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Student name; when set, the menu skips the name prompt
    pub student_name: Option<String>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    pub log_level: Option<String>,

    /// Decimals shown when rendering metrics
    pub precision: usize,

    /// Metrics computed by the menu and `stats`, in display order
    pub metrics: Vec<Metric>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            student_name: None,
            log_level: None,
            precision: DEFAULT_PRECISION,
            metrics: Metric::ALL.to_vec(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .gradetracker.yml
        let local_config = PathBuf::from(".gradetracker.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/gradetracker/gradetracker.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("gradetracker").join("gradetracker.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Metrics to compute; an empty list falls back to all metrics
    pub fn active_metrics(&self) -> Vec<Metric> {
        if self.metrics.is_empty() {
            Metric::ALL.to_vec()
        } else {
            self.metrics.clone()
        }
    }
}
