//! Demo configuration
//!
//! One YAML file holds the slider settings, its looks and the binding mode.
//! Default location: ~/.config/column-slider/config.yaml

use column_slider_core::{load_yaml_or_default, SliderConfig};
use column_slider_widgets::AppearanceConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Range, step, track height and initial value
    pub slider: SliderConfig,
    /// Colors, width, suffix
    pub appearance: AppearanceConfig,
    /// Feed committed values back into the bound value
    pub two_way_binding: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        // 0-50 in whole steps on a 300px amber column
        Self {
            slider: SliderConfig {
                max: 50.0,
                step: 1.0,
                track_height: 300.0,
                ..SliderConfig::default()
            },
            appearance: AppearanceConfig {
                width: 100.0,
                minimum_track_tint: "#ffc069".to_string(),
                maximum_track_tint: "#fff".to_string(),
                text_color: "#ffc069".to_string(),
                ..AppearanceConfig::default()
            },
            two_way_binding: false,
        }
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/column-slider/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("column-slider")
        .join("config.yaml")
}

/// Load the demo config, logging anything that will only work degraded
pub fn load_config(path: &Path) -> DemoConfig {
    let config: DemoConfig = load_yaml_or_default(path);
    if let Err(e) = config.slider.validate() {
        log::warn!("slider config: {} (continuing with clamped behavior)", e);
    }
    log::info!(
        "slider [{}, {}] step {}, {}px track, two-way binding {}",
        config.slider.min,
        config.slider.max,
        config.slider.step,
        config.slider.track_height,
        if config.two_way_binding { "on" } else { "off" }
    );
    config
}
