//! Application configuration
//!
//! Supports multiple profiles (debug, release) with different settings.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use super::input::{DEFAULT_CAPACITY, DEFAULT_LINE_HEIGHT_PX};

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Client area width
    pub width: f64,
    /// Client area height
    pub height: f64,
    /// Whether the window should be resizable
    pub resizable: bool,
    /// Whether to enable vsync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Window Shell".to_string(),
            width: 800.0,
            height: 600.0,
            resizable: false,
            vsync: true,
        }
    }
}

/// Input bridge configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Events kept per queue before the oldest are dropped
    pub queue_capacity: usize,
    /// Forward key repeats as extra presses
    pub autorepeat: bool,
    /// Pixels per wheel line for touchpads reporting pixel deltas
    pub line_height_px: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_CAPACITY,
            autorepeat: false,
            line_height_px: DEFAULT_LINE_HEIGHT_PX,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// The active profile (debug, release, etc.)
    pub profile: String,
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
}

impl AppConfig {
    /// Loads configuration based on the specified profile
    ///
    /// Sources, later ones overriding earlier ones:
    /// 1. config/{profile}.toml (next to the executable, else ./config)
    /// 2. Environment variables with prefix APP_ (e.g., APP_INPUT__AUTOREPEAT=true)
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        let file = match Self::find_config_dir() {
            Some(dir) => File::from(dir.join(profile).as_path()).required(false),
            None => File::with_name(&format!("config/{}", profile)).required(false),
        };

        Config::builder()
            .add_source(file)
            // Use __ as separator for nested fields (e.g., APP_WINDOW__WIDTH)
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override("profile", profile)?
            .build()?
            .try_deserialize()
    }

    /// Finds the config directory next to the executable or in the current directory
    fn find_config_dir() -> Option<std::path::PathBuf> {
        if let Ok(exe_path) = std::env::current_exe()
            && let Some(exe_dir) = exe_path.parent()
        {
            let config_dir = exe_dir.join("config");
            if config_dir.exists() {
                return Some(config_dir);
            }
        }

        let cwd_config = std::path::PathBuf::from("config");
        cwd_config.exists().then_some(cwd_config)
    }

    /// Loads configuration using the APP_PROFILE environment variable,
    /// defaulting to "release"
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let profile = std::env::var("APP_PROFILE").unwrap_or_else(|_| "release".to_string());
        Self::load(&profile)
    }

    /// Built-in settings used when no configuration can be loaded
    pub fn fallback(profile: &str) -> Self {
        Self {
            profile: profile.to_string(),
            window: WindowConfig::default(),
            input: InputConfig::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::load("release").unwrap_or_else(|_| Self::fallback("release"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_matches_input_defaults() {
        let config = AppConfig::fallback("test");
        assert_eq!(config.profile, "test");
        assert_eq!(config.input.queue_capacity, 16);
        assert!(!config.input.autorepeat);
        assert_eq!(config.window.width, 800.0);
    }

    #[test]
    fn missing_profile_file_still_loads() {
        let config = AppConfig::load("no-such-profile").expect("defaults should fill in");
        assert_eq!(config.profile, "no-such-profile");
        assert!(config.input.queue_capacity > 0);
    }
}
