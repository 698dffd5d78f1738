use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::{DrillError, source::SourceId, summary::DEFAULT_PRECIPITATION_THRESHOLD};

/// City shown by `drill weather` when none is given and none is configured.
pub const FALLBACK_CITY: &str = "Chicago";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// default_source = "file"
/// data_file = "/home/me/cities.json"
/// default_city = "Seattle"
/// precipitation_threshold = 0.2
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Optional default source id, "builtin" or "file".
    pub default_source: Option<String>,

    /// JSON array of weather records used by the "file" source.
    pub data_file: Option<PathBuf>,

    pub default_city: Option<String>,

    /// Fraction in `[0, 1]`; defaults to 0.1.
    pub precipitation_threshold: Option<f64>,
}

impl Config {
    /// Return the default source as a strongly-typed SourceId, `Builtin` when unset.
    pub fn default_source_id(&self) -> Result<SourceId> {
        match self.default_source.as_deref() {
            Some(s) => Ok(SourceId::try_from(s)?),
            None => Ok(SourceId::Builtin),
        }
    }

    pub fn set_default_source(&mut self, id: SourceId) {
        self.default_source = Some(id.as_str().to_string());
    }

    pub fn city_or_default<'a>(&'a self, city: Option<&'a str>) -> &'a str {
        city.or(self.default_city.as_deref()).unwrap_or(FALLBACK_CITY)
    }

    /// Precipitation threshold, validated to the 0..=1 fraction scale.
    pub fn threshold(&self) -> Result<f64, DrillError> {
        let threshold = self.precipitation_threshold.unwrap_or(DEFAULT_PRECIPITATION_THRESHOLD);
        if (0.0..=1.0).contains(&threshold) {
            Ok(threshold)
        } else {
            Err(DrillError::InvalidThreshold(threshold))
        }
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!(path = %path.display(), ?cfg, "loaded config");
        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "drill", "drill-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
