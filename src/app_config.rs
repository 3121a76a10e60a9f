use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::errors::AppError;
use crate::exporters::{ExportFormat, MarkerPalette};
use crate::locator_scanner::ScanMode;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// How locator lines are read
    #[serde(default)]
    pub scan_mode: ScanMode,

    /// Output format
    #[serde(default)]
    pub format: ExportFormat,

    /// Marker color palette, only relevant to marker exports
    #[serde(default)]
    pub marker_palette: MarkerPalette,

    /// Accepted locator colors; empty accepts every color
    #[serde(default)]
    pub colors: Vec<String>,

    /// Directory for exported files; defaults to the input's directory
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        for color in &self.colors {
            if color.trim().is_empty() {
                return Err(AppError::Config("Color selection contains an empty color".to_string()).into());
            }
            if color.trim().chars().any(char::is_whitespace) {
                return Err(AppError::Config(format!("Invalid color '{}': colors are single tokens", color)).into());
            }
        }

        if !self.colors.is_empty() && !self.scan_mode.is_color_aware() {
            warn!("Colors are configured but scan mode '{}' does not read colors", self.scan_mode);
        }

        Ok(())
    }

    /// Level to log at: the command-line choice wins over the configured one
    pub fn effective_log_level(&self, cli_level: Option<LogLevel>) -> LogLevel {
        cli_level.unwrap_or_else(|| self.log_level.clone())
    }

    /// Load the config file if present, without creating one
    pub fn load_if_exists<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }
        Self::load_or_create(path).map(Some)
    }

    /// Load the config file, or write a default one if it doesn't exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {}", path.display()))?;
            let reader = BufReader::new(file);
            let config: Config = serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            return Ok(config);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write default config to file: {}", path.display()))?;
        Ok(config)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            scan_mode: ScanMode::default(),
            format: ExportFormat::default(),
            marker_palette: MarkerPalette::default(),
            colors: Vec::new(),
            output_dir: None,
            log_level: LogLevel::default(),
        }
    }
}
