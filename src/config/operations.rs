//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::{CONFIG_FILE_NAME, MAX_CONTEXT_LINES};
use crate::error::{DiffReportError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(DiffReportError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DiffReportError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load `.diff-report.yaml` from `dir`, or return defaults when it does not exist.
    pub fn load_from_dir_or_default<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        if path.is_file() {
            log::debug!("loading config from {}", path.display());
            Self::load(&path)
        } else {
            log::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            DiffReportError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            DiffReportError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `context_lines` must not exceed `MAX_CONTEXT_LINES`
    /// - `exclude_paths` entries must be non-empty, valid globs
    pub fn validate(&self) -> Result<()> {
        if self.context_lines > MAX_CONTEXT_LINES {
            return Err(DiffReportError::UserError(format!(
                "config validation failed: context_lines must be at most {} (found {})",
                MAX_CONTEXT_LINES, self.context_lines
            )));
        }

        if self.exclude_paths.iter().any(|p| p.trim().is_empty()) {
            return Err(DiffReportError::UserError(
                "config validation failed: exclude_paths entries must be non-empty".to_string(),
            ));
        }

        self.exclude_globset()?;
        Ok(())
    }

    /// Compile `exclude_paths` into a matcher.
    pub fn exclude_globset(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();

        for pattern in &self.exclude_paths {
            let normalized = pattern.trim().replace('\\', "/");
            let glob = Glob::new(&normalized).map_err(|e| {
                DiffReportError::UserError(format!(
                    "config validation failed: invalid exclude_paths pattern '{}': {}",
                    pattern, e
                ))
            })?;
            builder.add(glob);
        }

        builder.build().map_err(|e| {
            DiffReportError::UserError(format!("failed to build exclude_paths matcher: {}", e))
        })
    }
}
