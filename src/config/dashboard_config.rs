use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::services::error_handling::{DashboardError, Result};
use crate::services::filter_state::QuickFilter;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// JSON catalog to load instead of the built-in sample portfolio
    pub catalog_path: Option<PathBuf>,

    /// Tracing filter used when RUST_LOG is not set
    pub log_level: String,

    pub currency_symbol: String,

    /// Columns available to a Gantt bar
    pub gantt_width: usize,

    /// Whether the text renderer emits ANSI colors
    pub color: bool,

    /// Quick filter applied before any command-line filters
    pub default_quick_filter: Option<QuickFilter>,

    /// Date project health is measured against; today when unset
    pub reference_date: Option<NaiveDate>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_level: "warn".to_string(),
            currency_symbol: "$".to_string(),
            gantt_width: 48,
            color: true,
            default_quick_filter: None,
            reference_date: None,
        }
    }
}

impl DashboardConfig {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| DashboardError::Configuration {
            message: "Could not determine config directory".to_string(),
        })?;

        Ok(config_dir.join("portfolio-dashboard").join("config.toml"))
    }

    /// Load from the default location. A missing file yields defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| DashboardError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|e| DashboardError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| DashboardError::Configuration {
            message: e.to_string(),
        })?;
        std::fs::write(path, content)?;

        info!(path = %path.display(), "Configuration saved");
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.gantt_width == 0 {
            return Err(DashboardError::Configuration {
                message: "gantt_width must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = DashboardConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "currency_symbol = \"€\"\ndefault_quick_filter = \"at-risk\"\nreference_date = \"2024-06-01\"\n",
        )
        .unwrap();

        let config = DashboardConfig::load_from(&path).unwrap();
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.default_quick_filter, Some(QuickFilter::AtRisk));
        assert_eq!(config.today(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(config.gantt_width, 48);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = DashboardConfig {
            catalog_path: Some(PathBuf::from("/data/portfolio.json")),
            color: false,
            ..DashboardConfig::default()
        };

        config.save_to(&path).unwrap();
        assert_eq!(DashboardConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_bad_values_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        std::fs::write(&path, "default_quick_filter = \"urgent\"\n").unwrap();
        assert!(matches!(
            DashboardConfig::load_from(&path),
            Err(DashboardError::ConfigParse { .. })
        ));

        std::fs::write(&path, "gantt_width = 0\n").unwrap();
        assert!(matches!(
            DashboardConfig::load_from(&path),
            Err(DashboardError::Configuration { .. })
        ));
    }
}
