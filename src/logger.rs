use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;
use std::path::PathBuf;

/// File logger for the `log` facade.
///
/// The terminal belongs to the UI, so records only ever go to a file. With
/// logging disabled nothing is installed and every `log::` call is a no-op.
#[derive(Debug, Clone)]
pub struct Logger {
    enabled: bool,
    level: LevelFilter,
    log_path: Option<PathBuf>,
}

impl Logger {
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let level = config
            .level
            .parse::<LevelFilter>()
            .with_context(|| format!("Invalid log level '{}'", config.level))?;
        let log_path = if config.enabled {
            Some(Self::get_log_file_path()?)
        } else {
            None
        };

        Ok(Self {
            enabled: config.enabled,
            level,
            log_path,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn log_path(&self) -> Option<&PathBuf> {
        self.log_path.as_ref()
    }

    /// Install as the global logger. Does nothing when disabled.
    pub fn install(&self) -> Result<()> {
        let Some(path) = &self.log_path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

        fern::Dispatch::new()
            .format(|out, message, record| {
                let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
                out.finish(format_args!(
                    "{}",
                    Self::format_line(&timestamp, record.level(), record.target(), message)
                ))
            })
            .level(self.level)
            .chain(file)
            .apply()
            .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

        log::info!("Logging to {}", path.display());
        Ok(())
    }

    /// Format one log line
    pub fn format_line(timestamp: &str, level: log::Level, target: &str, message: &dyn std::fmt::Display) -> String {
        format!("[{}] {:<5} {}: {}", timestamp, level, target, message)
    }

    /// Get the log file path
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
    }
}
