//! Scene configuration.
//!
//! Every field has a default, so an empty YAML document is a valid config.

use crate::error::{Error, Result};
use crate::rasterizer::MAX_RADIUS;
use crate::render::ChordStrategy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// How circles of a scene are rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    /// Outline only.
    Outline,
    /// Outline filled with chords.
    Filled,
    /// Per-pixel distance test.
    Naive,
    /// Outline or filled, chosen per circle.
    #[default]
    Random,
}

/// Scene settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Window title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Screen width in pixels.
    #[serde(default = "default_screen_size")]
    pub screen_width: u32,

    /// Screen height in pixels.
    #[serde(default = "default_screen_size")]
    pub screen_height: u32,

    /// Number of circles.
    #[serde(default = "default_circle_count")]
    pub circle_count: usize,

    /// Radius of every circle.
    #[serde(default = "default_radius")]
    pub radius: i32,

    /// Simulation ticks per second.
    #[serde(default = "default_tick_rate")]
    pub tick_rate: u32,

    /// Rasterization of each circle.
    #[serde(default)]
    pub fill: FillMode,

    /// Chord fill strategy.
    #[serde(default)]
    pub strategy: ChordStrategy,

    /// Largest per-axis speed in pixels per tick. Zero keeps circles still.
    #[serde(default)]
    pub max_speed: i32,

    /// RNG seed. Unset draws one from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_title() -> String {
    "Circle Texture Example".to_string()
}
fn default_screen_size() -> u32 {
    1024
}
fn default_circle_count() -> usize {
    100
}
fn default_radius() -> i32 {
    50
}
fn default_tick_rate() -> u32 {
    60
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            screen_width: default_screen_size(),
            screen_height: default_screen_size(),
            circle_count: default_circle_count(),
            radius: default_radius(),
            tick_rate: default_tick_rate(),
            fill: FillMode::default(),
            strategy: ChordStrategy::default(),
            max_speed: 0,
            seed: None,
        }
    }
}

impl SceneConfig {
    /// Parse and validate a YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or a value is out of range.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading scene config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for an empty screen and
    /// [`Error::Config`] for a zero tick rate, a bad radius or a negative speed.
    pub fn validate(&self) -> Result<()> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if self.tick_rate == 0 {
            return Err(Error::Config("tick_rate must be at least 1".to_string()));
        }
        if !(0..=MAX_RADIUS).contains(&self.radius) {
            return Err(Error::Config(format!(
                "radius {} outside 0..={MAX_RADIUS}",
                self.radius
            )));
        }
        if self.max_speed < 0 {
            return Err(Error::Config(format!("max_speed {} is negative", self.max_speed)));
        }
        Ok(())
    }

    /// Length of one simulation tick.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SceneConfig::default();
        assert_eq!(config.title, "Circle Texture Example");
        assert_eq!((config.screen_width, config.screen_height), (1024, 1024));
        assert_eq!(config.circle_count, 100);
        assert_eq!(config.radius, 50);
        assert_eq!(config.tick_rate, 60);
        assert_eq!(config.fill, FillMode::Random);
        assert_eq!(config.strategy, ChordStrategy::FixedPoint);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = SceneConfig::from_yaml("{}").unwrap();
        assert_eq!(config, SceneConfig::default());
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r"
screen_width: 320
screen_height: 200
circle_count: 5
fill: filled
strategy: floating_point
max_speed: 3
seed: 42
";
        let config = SceneConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.screen_width, 320);
        assert_eq!(config.screen_height, 200);
        assert_eq!(config.circle_count, 5);
        assert_eq!(config.radius, 50);
        assert_eq!(config.fill, FillMode::Filled);
        assert_eq!(config.strategy, ChordStrategy::FloatingPoint);
        assert_eq!(config.max_speed, 3);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(SceneConfig::from_yaml("radius: [1, 2"), Err(Error::Yaml(_))));
        assert!(matches!(SceneConfig::from_yaml("fill: striped"), Err(Error::Yaml(_))));
    }

    #[test]
    fn test_validation() {
        let config = SceneConfig { screen_width: 0, ..SceneConfig::default() };
        assert!(matches!(config.validate(), Err(Error::InvalidDimensions { width: 0, .. })));

        let config = SceneConfig { tick_rate: 0, ..SceneConfig::default() };
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let config = SceneConfig { radius: -4, ..SceneConfig::default() };
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let config = SceneConfig { max_speed: -1, ..SceneConfig::default() };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_tick_interval() {
        let config = SceneConfig { tick_rate: 50, ..SceneConfig::default() };
        assert_eq!(config.tick_interval(), Duration::from_millis(20));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            SceneConfig::load("/nonexistent/scene.yaml"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.yaml");
        std::fs::write(&path, "circle_count: 3\nradius: 8\n").unwrap();

        let config = SceneConfig::load(&path).unwrap();
        assert_eq!(config.circle_count, 3);
        assert_eq!(config.radius, 8);
    }
}
