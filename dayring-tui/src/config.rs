use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use time::Time;

/// Persisted settings. Every key defaults independently so a partial (or
/// absent) config file is never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayringConfig {
    /// Bedtime as "HH:MM"; anchor of the whole schedule.
    #[serde(default = "default_bedtime")]
    pub bedtime: String,
    /// Base URL of the optional focus endpoint. Empty disables remote calls.
    #[serde(default)]
    pub endpoint_url: String,
    /// Bearer token sent to the focus endpoint when non-empty.
    #[serde(default)]
    pub access_token: String,
    /// Name of the active color theme.
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_bedtime() -> String {
    "23:00".to_string()
}

fn default_theme() -> String {
    crate::theme::DEFAULT_THEME.to_string()
}

impl Default for DayringConfig {
    fn default() -> Self {
        Self {
            bedtime: default_bedtime(),
            endpoint_url: String::new(),
            access_token: String::new(),
            theme: default_theme(),
        }
    }
}

impl DayringConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("dayring")
            .join("config.toml"))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("dayring")
            .join("dayring.log"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }

    /// The configured bedtime as a time-of-day, falling back to the default
    /// when the stored string doesn't parse.
    pub fn bedtime_time(&self) -> Time {
        parse_bedtime(&self.bedtime).unwrap_or_else(|| {
            parse_bedtime(&default_bedtime()).expect("default bedtime is valid")
        })
    }
}

/// Parse "HH:MM" into a time-of-day. Returns None for anything malformed.
pub fn parse_bedtime(s: &str) -> Option<Time> {
    let (hours, minutes) = s.trim().split_once(':')?;
    let hours: u8 = hours.parse().ok()?;
    let minutes: u8 = minutes.parse().ok()?;
    Time::from_hms(hours, minutes, 0).ok()
}
