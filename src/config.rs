use crate::domain::TripWindow;
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_TITLE: &str = "Punta Cana Trip Organizer";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    BadDate(String),
    #[error("trip start {start} is after trip end {end}")]
    InvertedWindow { start: NaiveDate, end: NaiveDate },
}

/// Contents of config.json; every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub title: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Values given on the command line, applied over the file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub title: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Resolved application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub trip: TripWindow,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            trip: TripWindow::default(),
        }
    }
}

impl AppConfig {
    /// Defaults, then the config file (if any), then command-line overrides
    pub fn load(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let file = match path {
            Some(p) => load_file(p)?,
            None => match default_config_path() {
                Some(p) if p.exists() => load_file(&p)?,
                _ => ConfigFile::default(),
            },
        };
        Self::resolve(file, overrides)
    }

    fn resolve(file: ConfigFile, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();

        let start = match &overrides.start {
            Some(s) => parse_cli_date(s)?,
            None => file.start.unwrap_or(defaults.trip.start),
        };
        let end = match &overrides.end {
            Some(s) => parse_cli_date(s)?,
            None => file.end.unwrap_or(defaults.trip.end),
        };
        let trip = TripWindow::new(start, end).ok_or(ConfigError::InvertedWindow { start, end })?;

        let title = overrides
            .title
            .clone()
            .or(file.title)
            .unwrap_or(defaults.title);

        Ok(Self { title, trip })
    }
}

/// ~/.config/trip-organizer/config.json (platform equivalent)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("trip-organizer").join("config.json"))
}

fn load_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_cli_date(s: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| ConfigError::BadDate(s.to_string()))
}
