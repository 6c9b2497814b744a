//! Visual properties of a column slider

use iced::Color;
use serde::{Deserialize, Serialize};

use crate::theme::{self, parse_hex_color};

#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    /// Track width in pixels
    pub width: f32,
    pub border_radius: f32,
    /// Filled part of the track
    pub minimum_track_tint: Color,
    /// Unfilled part of the track
    pub maximum_track_tint: Color,
    pub text_color: Color,
    pub text_size: f32,
    /// Appended to the value label (e.g. "%")
    pub suffix: String,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            width: theme::TRACK_WIDTH,
            border_radius: 0.0,
            minimum_track_tint: theme::MINIMUM_TRACK_TINT,
            maximum_track_tint: theme::MAXIMUM_TRACK_TINT,
            text_color: theme::TEXT_COLOR,
            text_size: theme::TEXT_SIZE,
            suffix: String::new(),
        }
    }
}

/// Serializable form of `Appearance` with hex color strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    pub width: f32,
    pub border_radius: f32,
    pub minimum_track_tint: String,
    pub maximum_track_tint: String,
    pub text_color: String,
    pub text_size: f32,
    pub suffix: String,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            width: theme::TRACK_WIDTH,
            border_radius: 0.0,
            minimum_track_tint: "#fff".to_string(),
            maximum_track_tint: "#eee".to_string(),
            text_color: "#1890ff".to_string(),
            text_size: theme::TEXT_SIZE,
            suffix: String::new(),
        }
    }
}

impl AppearanceConfig {
    /// Resolve colors; an unparsable color logs a warning and keeps its default
    pub fn to_appearance(&self) -> Appearance {
        let defaults = Appearance::default();
        let color = |hex: &str, fallback: Color| match parse_hex_color(hex) {
            Ok(color) => color,
            Err(e) => {
                log::warn!("AppearanceConfig: {}, using default", e);
                fallback
            }
        };

        Appearance {
            width: self.width,
            border_radius: self.border_radius,
            minimum_track_tint: color(&self.minimum_track_tint, defaults.minimum_track_tint),
            maximum_track_tint: color(&self.maximum_track_tint, defaults.maximum_track_tint),
            text_color: color(&self.text_color, defaults.text_color),
            text_size: self.text_size,
            suffix: self.suffix.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_colors_resolve() {
        let config = AppearanceConfig {
            minimum_track_tint: "#ffc069".to_string(),
            suffix: "%".to_string(),
            ..AppearanceConfig::default()
        };
        let appearance = config.to_appearance();
        assert_eq!(appearance.minimum_track_tint, Color::from_rgb8(0xff, 0xc0, 0x69));
        assert_eq!(appearance.maximum_track_tint, Color::from_rgb8(0xee, 0xee, 0xee));
        assert_eq!(appearance.suffix, "%");
    }

    #[test]
    fn test_bad_color_keeps_default() {
        let config = AppearanceConfig {
            text_color: "blue".to_string(),
            ..AppearanceConfig::default()
        };
        assert_eq!(config.to_appearance().text_color, theme::TEXT_COLOR);
    }

    #[test]
    fn test_partial_yaml() {
        let config: AppearanceConfig = serde_yaml::from_str("width: 80\nsuffix: \" dB\"\n").unwrap();
        assert_eq!(config.width, 80.0);
        assert_eq!(config.suffix, " dB");
        assert_eq!(config.text_color, "#1890ff");
    }
}
