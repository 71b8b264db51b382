//! Configuration types for Figura diagram rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file; every section and field is optional.
//!
//! - [`AppConfig`] - Top-level configuration combining circle and style settings.
//! - [`CircleConfig`] - Geometry settings for circle diagrams.
//! - [`StyleConfig`] - Visual styling options such as background color.
//!
//! # Example
//!
//! ```
//! # use figura::config::AppConfig;
//! let config: AppConfig = toml::from_str("[circle]\nradius = 100").unwrap();
//! assert_eq!(config.circle().radius(), 100.0);
//! assert!(config.style().background_color().unwrap().is_none());
//! ```

use serde::Deserialize;

use figura_core::color::Color;

use crate::circle::DEFAULT_RADIUS;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Circle geometry section.
    #[serde(default)]
    circle: CircleConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(circle: CircleConfig, style: StyleConfig) -> Self {
        Self { circle, style }
    }

    /// Returns the circle configuration.
    pub fn circle(&self) -> &CircleConfig {
        &self.circle
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Geometry settings for circle diagrams.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CircleConfig {
    /// Drawn radius in pixels.
    #[serde(default = "default_radius")]
    radius: f32,
}

impl CircleConfig {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    /// Returns the drawn radius in pixels.
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS)
    }
}

fn default_radius() -> f32 {
    DEFAULT_RADIUS
}

/// Visual styling configuration for rendered diagrams.
///
/// Fields that are not set fall back to renderer defaults.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    /// Background [`Color`] for diagrams, as a color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    pub fn new(background_color: Option<String>) -> Self {
        Self { background_color }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.circle().radius(), 120.0);
        assert!(config.style().background_color().unwrap().is_none());
    }

    #[test]
    fn test_partial_sections() {
        let config: AppConfig = toml::from_str("[style]\nbackground_color = \"white\"").unwrap();
        assert_eq!(config.circle().radius(), 120.0);
        assert!(config.style().background_color().unwrap().is_some());

        let config: AppConfig = toml::from_str("[circle]").unwrap();
        assert_eq!(config.circle().radius(), 120.0);
    }

    #[test]
    fn test_invalid_background_color() {
        let style = StyleConfig::new(Some("no-such-color".to_string()));
        let err = style.background_color().unwrap_err();
        assert!(err.contains("Invalid background color"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(toml::from_str::<AppConfig>("[circle]\ndiameter = 3").is_err());
    }
}
