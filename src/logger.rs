//! Logging for the terminal UI
//!
//! The TUI owns stdout, so nothing is printed. Messages go to two places:
//! an in-memory [`Logger`] shown in the logs dialog, and, when enabled in the
//! config, a log file fed by the `log` facade through `fern`.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Entries kept in memory before the oldest are dropped
const MAX_IN_MEMORY_LOGS: usize = 500;

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        log::debug!("{}", message);

        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= MAX_IN_MEMORY_LOGS {
                logs.remove(0);
            }
            logs.push(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Default location of the log file
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .or_else(dirs::cache_dir)
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join("wishmaker").join("wishmaker.log"))
}

/// Route `log` records to a file when logging is enabled.
///
/// Returns the file path in use, or `None` when logging is disabled.
pub fn init_file_logging(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = get_log_file_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(config.level_filter())
        .chain(file)
        .apply()
        .context("Failed to install file logger")?;

    log::info!("Logging to {}", path.display());
    Ok(Some(path))
}
