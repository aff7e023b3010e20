//! Configuration management for WishMaker
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{CONFIG_GENERATED, TICK_RATE_DEFAULT_MS, TICK_RATE_MAX_MS, TICK_RATE_MIN_MS};
use crate::presenter::DeletePolicy;
use crate::utils::date;
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub events: EventsConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Capture the mouse so the wheel scrolls the wish list
    pub mouse_enabled: bool,
    /// Show wish descriptions under their titles
    pub show_descriptions: bool,
    /// Ask before deleting a wish
    pub confirm_delete: bool,
    /// Interval between UI ticks in milliseconds
    pub tick_rate_ms: u64,
}

/// Event list configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EventsConfig {
    /// What to do when asked to delete a wish that is not there
    /// Options: "ignore", "report"
    pub delete_policy: DeletePolicy,
    /// Start with the sample wishes instead of an empty list
    pub seed_sample_events: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file
    pub enabled: bool,
    /// Minimum level written to the log file
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: false,
            show_descriptions: true,
            confirm_delete: true,
            tick_rate_ms: TICK_RATE_DEFAULT_MS,
        }
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            delete_policy: DeletePolicy::Ignore,
            seed_sample_events: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed log level, falling back to `Info` for unknown names
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.level).unwrap_or(LevelFilter::Info)
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("wishmaker.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("wishmaker").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !(TICK_RATE_MIN_MS..=TICK_RATE_MAX_MS).contains(&self.ui.tick_rate_ms) {
            anyhow::bail!(
                "tick_rate_ms must be between {} and {} milliseconds, got {}",
                TICK_RATE_MIN_MS,
                TICK_RATE_MAX_MS,
                self.ui.tick_rate_ms
            );
        }

        if LevelFilter::from_str(&self.logging.level).is_err() {
            anyhow::bail!(
                "Invalid logging level '{}': expected off, error, warn, info, debug or trace",
                self.logging.level
            );
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# WishMaker Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(date::YMD_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("wishmaker"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
