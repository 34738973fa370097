//! Tracker configuration
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/squiggle-tracker/config.yaml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use squiggle_core::WaveShape;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TrackerConfig {
    /// Goal slider bounds and startup value
    pub goal: GoalConfig,
    /// Display settings (wave animation, period, shape)
    pub display: DisplayConfig,
}

/// Goal slider section, in ounces
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalConfig {
    /// Smallest selectable daily goal
    pub low: f32,
    /// Largest selectable daily goal
    pub high: f32,
    /// Goal preselected at startup
    pub default_goal: f32,
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            low: 30.0,
            high: 200.0,
            default_goal: 64.0,
        }
    }
}

/// Display configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Whether the track wave animates (amplitude fades to flat when off)
    pub animate_waves: bool,
    /// Milliseconds for one wavelength of wave travel
    pub wave_period_ms: u64,
    /// Tessellation strategy for the track wave
    pub wave_shape: WaveShape,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            animate_waves: true,
            wave_period_ms: 1500,
            wave_shape: WaveShape::Sine,
        }
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/squiggle-tracker/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("squiggle-tracker")
        .join("config.yaml")
}

/// Load configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_config(path: &Path) -> TrackerConfig {
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: Config file doesn't exist, using defaults");
        return TrackerConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<TrackerConfig>(&contents) {
            Ok(config) => {
                log::info!(
                    "load_config: Loaded config - Goal: {:.0} oz in [{:.0}, {:.0}], animate waves: {}",
                    config.goal.default_goal,
                    config.goal.low,
                    config.goal.high,
                    config.display.animate_waves
                );
                config
            }
            Err(e) => {
                log::warn!("load_config: Failed to parse config: {}, using defaults", e);
                TrackerConfig::default()
            }
        },
        Err(e) => {
            log::warn!(
                "load_config: Failed to read config file: {}, using defaults",
                e
            );
            TrackerConfig::default()
        }
    }
}

/// Save configuration to a YAML file
pub fn save_config(config: &TrackerConfig, path: &Path) -> Result<()> {
    log::info!("save_config: Saving to {:?}", path);

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;

    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    log::info!("save_config: Config saved successfully");
    Ok(())
}
