//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/feelone/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/feelone/` (~/.config/feelone/)
//! - State/Logs: `$XDG_STATE_HOME/feelone/` (~/.local/state/feelone/)

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Demo notice configuration
    #[serde(default)]
    pub demo: DemoConfig,

    /// Screen timer durations
    #[serde(default)]
    pub timing: TimingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Demo notice configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DemoConfig {
    /// Show the "in development" screen after login and the
    /// "mock data" overlay on results
    #[serde(default = "default_show_notices")]
    pub show_notices: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            show_notices: default_show_notices(),
        }
    }
}

fn default_show_notices() -> bool {
    true
}

/// Timer durations for each screen, in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimingConfig {
    /// Delay between revealed prompt characters
    #[serde(default = "default_typing_interval")]
    pub typing_interval_ms: u64,

    /// Pause after the prompt is fully shown before the entry box appears
    #[serde(default = "default_reveal_pause")]
    pub reveal_pause_ms: u64,

    /// Delay between the entry box appearing and it taking focus
    #[serde(default = "default_focus_delay")]
    pub focus_delay_ms: u64,

    /// Period of the analyzing dot animation
    #[serde(default = "default_dots_interval")]
    pub dots_interval_ms: u64,

    /// How long the analyzing screen stays up
    #[serde(default = "default_analysis_delay")]
    pub analysis_delay_ms: u64,

    /// Delay before the mock-data notice opens on the results screen
    #[serde(default = "default_demo_notice_delay")]
    pub demo_notice_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            typing_interval_ms: default_typing_interval(),
            reveal_pause_ms: default_reveal_pause(),
            focus_delay_ms: default_focus_delay(),
            dots_interval_ms: default_dots_interval(),
            analysis_delay_ms: default_analysis_delay(),
            demo_notice_delay_ms: default_demo_notice_delay(),
        }
    }
}

impl TimingConfig {
    pub fn typing_interval(&self) -> Duration {
        Duration::from_millis(self.typing_interval_ms)
    }

    pub fn reveal_pause(&self) -> Duration {
        Duration::from_millis(self.reveal_pause_ms)
    }

    pub fn focus_delay(&self) -> Duration {
        Duration::from_millis(self.focus_delay_ms)
    }

    pub fn dots_interval(&self) -> Duration {
        Duration::from_millis(self.dots_interval_ms)
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    pub fn demo_notice_delay(&self) -> Duration {
        Duration::from_millis(self.demo_notice_delay_ms)
    }

    /// Validate timings, returning error message if invalid
    ///
    /// Repeating timers must have a non-zero period.
    pub fn validate(&self) -> Result<()> {
        if self.typing_interval_ms == 0 {
            return Err(Error::Config(
                "timing.typing_interval_ms must be greater than 0".to_string(),
            ));
        }
        if self.dots_interval_ms == 0 {
            return Err(Error::Config(
                "timing.dots_interval_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_typing_interval() -> u64 {
    50
}

fn default_reveal_pause() -> u64 {
    300
}

fn default_focus_delay() -> u64 {
    100
}

fn default_dots_interval() -> u64 {
    500
}

fn default_analysis_delay() -> u64 {
    3000
}

fn default_demo_notice_delay() -> u64 {
    500
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Maximum number of log files to keep
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            max_files: default_max_log_files(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    5
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.timing.validate()
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/feelone/config.toml` (~/.config/feelone/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("feelone").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/feelone/` (~/.local/state/feelone/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("feelone")
    }
}
