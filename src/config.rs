//! Configuration management for speeddial
//!
//! This module handles loading, parsing, and validation of configuration files,
//! and turns the `[dial]` section into widget props.

use crate::constants::{
    APP_DIR_NAME, CONFIG_GENERATED, DEFAULT_BUTTON_SIZE, DEFAULT_ICON, DEFAULT_ITEM_HEIGHT, DEFAULT_OFFSET_X,
    DEFAULT_OFFSET_Y, DEFAULT_SPACING, MAX_AUTO_CLOSE_DELAY_MS, MAX_BUTTON_SIZE, MAX_ITEM_HEIGHT, MAX_OFFSET,
    MAX_TICK_RATE_MS, MIN_TICK_RATE_MS,
};
use crate::dial::{ActionButtonProps, ActionItem, ActivationState, Orientation};
use crate::utils::color::{parse_color, ColorParseError};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub dial: DialConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Event loop tick interval in milliseconds
    pub tick_rate_ms: u64,
}

/// Speed dial appearance and behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DialConfig {
    /// Start with the action stack open
    pub initial_active: bool,
    /// Direction the stack grows: "up" or "down"
    pub orientation: Orientation,
    /// Close the stack after an action is selected
    pub auto_close: bool,
    /// Delay before the auto-close in milliseconds (0 = immediately)
    pub auto_close_delay_ms: u64,
    /// Clicks outside the stack fall through instead of closing it
    pub background_tappable: bool,
    pub button_color: String,
    pub bg_color: String,
    pub bg_opacity: f32,
    pub size: u16,
    pub icon: String,
    pub spacing: u16,
    pub offset_x: u16,
    pub offset_y: u16,
    pub item_height: u16,
    /// Text drawn on the backdrop layer
    pub backdrop_text: Option<String>,
    pub items: Vec<ItemConfig>,
}

/// One action in the stack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemConfig {
    pub label: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// Level filter: error, warn, info, debug or trace
    pub level: String,
}

/// Validation failures for otherwise well-formed config files
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: u64,
        max: u64,
        value: u64,
    },
    #[error("bg_opacity must be between 0.0 and 1.0, got {0}")]
    InvalidOpacity(f32),
    #[error("Invalid {field}: {source}")]
    InvalidColor {
        field: String,
        #[source]
        source: ColorParseError,
    },
    #[error("Item {0}: label cannot be empty")]
    EmptyLabel(usize),
    #[error("icon cannot be empty")]
    EmptyIcon,
    #[error("Invalid log level '{0}'")]
    InvalidLogLevel(String),
}

fn default_true() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            tick_rate_ms: 100,
        }
    }
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            initial_active: false,
            orientation: Orientation::Up,
            auto_close: true,
            auto_close_delay_ms: 0,
            background_tappable: false,
            button_color: "black".to_string(),
            bg_color: "transparent".to_string(),
            bg_opacity: 1.0,
            size: DEFAULT_BUTTON_SIZE,
            icon: DEFAULT_ICON.to_string(),
            spacing: DEFAULT_SPACING,
            offset_x: DEFAULT_OFFSET_X,
            offset_y: DEFAULT_OFFSET_Y,
            item_height: DEFAULT_ITEM_HEIGHT,
            backdrop_text: None,
            items: vec![
                ItemConfig::new("New task", "#9b59b6", "✎"),
                ItemConfig::new("Notifications", "#3498db", "!"),
                ItemConfig::new("All tasks", "#1abc9c", "≡"),
            ],
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

impl ItemConfig {
    pub fn new(label: &str, color: &str, icon: &str) -> Self {
        Self {
            label: label.to_string(),
            color: Some(color.to_string()),
            icon: Some(icon.to_string()),
            enabled: true,
        }
    }
}

fn check_range(field: &'static str, value: u64, min: u64, max: u64) -> Result<(), ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::OutOfRange { field, min, max, value });
    }
    Ok(())
}

fn color_field(field: &str, value: &str) -> Result<ratatui::style::Color, ConfigError> {
    parse_color(value).map_err(|source| ConfigError::InvalidColor {
        field: field.to_string(),
        source,
    })
}

impl DialConfig {
    /// Validate ranges, colors and item labels
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("size", u64::from(self.size), 1, u64::from(MAX_BUTTON_SIZE))?;
        check_range("item_height", u64::from(self.item_height), 1, u64::from(MAX_ITEM_HEIGHT))?;
        check_range("spacing", u64::from(self.spacing), 0, u64::from(MAX_OFFSET))?;
        check_range("offset_x", u64::from(self.offset_x), 0, u64::from(MAX_OFFSET))?;
        check_range("offset_y", u64::from(self.offset_y), 0, u64::from(MAX_OFFSET))?;
        check_range("auto_close_delay_ms", self.auto_close_delay_ms, 0, MAX_AUTO_CLOSE_DELAY_MS)?;

        if !(0.0..=1.0).contains(&self.bg_opacity) {
            return Err(ConfigError::InvalidOpacity(self.bg_opacity));
        }
        if self.icon.trim().is_empty() {
            return Err(ConfigError::EmptyIcon);
        }

        color_field("button_color", &self.button_color)?;
        color_field("bg_color", &self.bg_color)?;
        for (index, item) in self.items.iter().enumerate() {
            if item.label.trim().is_empty() {
                return Err(ConfigError::EmptyLabel(index));
            }
            if let Some(color) = &item.color {
                color_field(&format!("items[{index}].color"), color)?;
            }
        }

        Ok(())
    }

    /// Build container props; every item reports its label to `on_select`
    pub fn to_props<F>(&self, on_select: F) -> Result<ActionButtonProps, ConfigError>
    where
        F: Fn(&str, &ActivationState) + 'static,
    {
        let on_select = Rc::new(on_select);

        let mut items = Vec::with_capacity(self.items.len());
        for (index, item) in self.items.iter().enumerate() {
            let callback = Rc::clone(&on_select);
            let label = item.label.clone();
            let mut action = ActionItem::new(item.label.clone(), move |state| (*callback)(&label, state))
                .enabled(item.enabled);
            if let Some(color) = &item.color {
                action = action.color(color_field(&format!("items[{index}].color"), color)?);
            }
            if let Some(icon) = &item.icon {
                action = action.icon(icon.clone());
            }
            items.push(action);
        }

        let delay = (self.auto_close_delay_ms > 0).then(|| Duration::from_millis(self.auto_close_delay_ms));

        let mut props = ActionButtonProps::new()
            .active(self.initial_active)
            .orientation(self.orientation)
            .auto_close(self.auto_close)
            .auto_close_delay(delay)
            .background_tappable(self.background_tappable)
            .button_color(color_field("button_color", &self.button_color)?)
            .bg_color(color_field("bg_color", &self.bg_color)?)
            .bg_opacity(self.bg_opacity)
            .size(self.size)
            .icon(self.icon.clone())
            .spacing(self.spacing)
            .offset_x(self.offset_x)
            .offset_y(self.offset_y)
            .item_height(self.item_height)
            .children(items);
        if let Some(text) = &self.backdrop_text {
            props = props.backdrop(text.clone());
        }
        Ok(props)
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
        let current_dir_config = PathBuf::from("speeddial.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate UI settings
        check_range("tick_rate_ms", self.ui.tick_rate_ms, MIN_TICK_RATE_MS, MAX_TICK_RATE_MS)?;

        self.dial.validate()?;

        if self.logging.level.parse::<log::LevelFilter>().is_err() {
            return Err(ConfigError::InvalidLogLevel(self.logging.level.clone()).into());
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Speeddial Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
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
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
