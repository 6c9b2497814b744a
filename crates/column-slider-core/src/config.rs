//! YAML configuration for a slider
//!
//! Missing keys take their defaults. The host decides where the file lives;
//! `load_yaml_or_default` / `save_yaml` work for any config struct that embeds
//! `SliderConfig`.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::controller::SliderProps;
use crate::error::SliderError;
use crate::range::SliderRange;
use crate::store::ExternalResetPolicy;

/// Track height used when the config does not give one
pub const DEFAULT_TRACK_HEIGHT: f32 = 300.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub initial_value: f64,
    pub disabled: bool,
    pub min: f64,
    pub max: f64,
    /// 0 = continuous
    pub step: f64,
    /// Pixel length of the track
    pub track_height: f32,
    /// Behavior of external resets during a drag
    pub reset_policy: ExternalResetPolicy,
}

impl Default for SliderConfig {
    fn default() -> Self {
        let range = SliderRange::default();
        Self {
            initial_value: 0.0,
            disabled: false,
            min: range.min,
            max: range.max,
            step: range.step,
            track_height: DEFAULT_TRACK_HEIGHT,
            reset_policy: ExternalResetPolicy::default(),
        }
    }
}

impl SliderConfig {
    pub fn range(&self) -> SliderRange {
        SliderRange::new(self.min, self.max, self.step)
    }

    pub fn to_props(&self) -> SliderProps {
        SliderProps::new(self.track_height)
            .initial_value(self.initial_value)
            .disabled(self.disabled)
            .range(self.min, self.max)
            .step(self.step)
            .reset_policy(self.reset_policy)
    }

    /// Report the first problem, if any
    ///
    /// Invalid configs still work at runtime (values clamp to `min`, a
    /// non-positive track never moves), so callers usually just log this.
    pub fn validate(&self) -> Result<(), SliderError> {
        self.range().validate()?;
        if self.track_height.is_nan() || self.track_height <= 0.0 {
            return Err(SliderError::InvalidTrackHeight(self.track_height));
        }
        Ok(())
    }
}

/// Read a YAML document into `T`, falling back to `T::default()`
///
/// Nothing on disk is not an error: a fresh install simply runs on defaults.
/// A file that exists but cannot be read or parsed is logged and also yields
/// defaults, so a typo in a hand-edited file never keeps the slider from
/// coming up.
pub fn load_yaml_or_default<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("no config at {:?}, running on defaults", path);
            return T::default();
        }
        Err(e) => {
            log::warn!("cannot read {:?} ({}), running on defaults", path, e);
            return T::default();
        }
    };

    serde_yaml::from_str(&contents).unwrap_or_else(|e| {
        log::warn!("ignoring {:?}: {}", path, e);
        T::default()
    })
}

/// Write `value` as YAML at `path`, creating missing directories
pub fn save_yaml<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {:?}", dir))?;
    }
    let yaml = serde_yaml::to_string(value).context("encoding config as YAML")?;
    std::fs::write(path, yaml).with_context(|| format!("writing {:?}", path))?;
    log::debug!("config written to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SliderConfig::default();
        assert_eq!(config.initial_value, 0.0);
        assert!(!config.disabled);
        assert_eq!(config.range(), SliderRange::new(0.0, 1.0, 0.0));
        assert_eq!(config.track_height, DEFAULT_TRACK_HEIGHT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: SliderConfig = serde_yaml::from_str("max: 50\nstep: 1\n").unwrap();
        assert_eq!(config.min, 0.0);
        assert_eq!(config.max, 50.0);
        assert_eq!(config.step, 1.0);
        assert_eq!(config.reset_policy, ExternalResetPolicy::Overwrite);
    }

    #[test]
    fn test_reset_policy_snake_case() {
        let config: SliderConfig =
            serde_yaml::from_str("reset_policy: defer_while_dragging\n").unwrap();
        assert_eq!(config.reset_policy, ExternalResetPolicy::DeferWhileDragging);
    }

    #[test]
    fn test_validate_track_height() {
        let config = SliderConfig {
            track_height: 0.0,
            ..SliderConfig::default()
        };
        assert_eq!(config.validate(), Err(SliderError::InvalidTrackHeight(0.0)));
    }

    #[test]
    fn test_to_props() {
        let config = SliderConfig {
            initial_value: 10.0,
            max: 50.0,
            step: 1.0,
            ..SliderConfig::default()
        };
        let props = config.to_props();
        assert_eq!(props.initial_value, 10.0);
        assert_eq!(props.range, SliderRange::new(0.0, 50.0, 1.0));
        assert_eq!(props.track_height, DEFAULT_TRACK_HEIGHT);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("slider.yaml");
        let config = SliderConfig {
            initial_value: 5.0,
            max: 50.0,
            step: 1.0,
            reset_policy: ExternalResetPolicy::DeferWhileDragging,
            ..SliderConfig::default()
        };

        save_yaml(&config, &path).unwrap();
        assert_eq!(load_yaml_or_default::<SliderConfig>(&path), config);
    }

    #[test]
    fn test_load_missing_or_invalid_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            load_yaml_or_default::<SliderConfig>(&dir.path().join("absent.yaml")),
            SliderConfig::default()
        );

        let bad = dir.path().join("bad.yaml");
        std::fs::write(&bad, "max: [not, a, number]").unwrap();
        assert_eq!(load_yaml_or_default::<SliderConfig>(&bad), SliderConfig::default());
    }
}
