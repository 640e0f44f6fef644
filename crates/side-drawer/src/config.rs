//! Overlay configuration.
//!
//! [`OverlayConfig`] collects the tunables of a [`DrawerOverlay`] and can be
//! loaded from TOML. Every field is optional in the file:
//!
//! ```toml
//! cover_mode = "cover-navigation-bar-level"
//! mask_color = "#00000080"
//! default_duration_ms = 250
//! animated = true
//! easing = "ease-out-cubic"
//! tap_slop = 12.0
//! tap_timeout_ms = 300
//! ```
//!
//! [`DrawerOverlay`]: crate::widget::drawer::DrawerOverlay

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use side_drawer_core::Color;

use crate::error::ConfigError;
use crate::widget::animation::Easing;
use crate::widget::drawer::CoverMode;
use crate::widget::gesture::{DEFAULT_TAP_SLOP, DEFAULT_TAP_TIMEOUT_MS, TapConfig};

/// Default mask color, black at half opacity.
pub const DEFAULT_MASK_COLOR: Color = Color::from_white(0.0, 0.5);

/// Default transition duration in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 300;

/// Tunables for a drawer overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverlayConfig {
    /// Which view the overlay covers.
    pub cover_mode: CoverMode,
    /// Background color of the dimming mask.
    pub mask_color: Color,
    /// Duration used by [`toggle_item`](crate::widget::drawer::DrawerOverlay::toggle_item).
    pub default_duration_ms: u64,
    /// Whether toggles animate.
    pub animated: bool,
    /// Easing curve for every transition.
    pub easing: Easing,
    /// Maximum finger movement for a mask tap, in pixels.
    pub tap_slop: f32,
    /// Maximum press duration for a mask tap.
    pub tap_timeout_ms: u64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            cover_mode: CoverMode::default(),
            mask_color: DEFAULT_MASK_COLOR,
            default_duration_ms: DEFAULT_DURATION_MS,
            animated: true,
            easing: Easing::default(),
            tap_slop: DEFAULT_TAP_SLOP,
            tap_timeout_ms: DEFAULT_TAP_TIMEOUT_MS,
        }
    }
}

impl OverlayConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// The default transition duration.
    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.default_duration_ms)
    }

    /// Tap recognition settings for the mask.
    pub fn tap_config(&self) -> TapConfig {
        TapConfig {
            tap_timeout: Duration::from_millis(self.tap_timeout_ms),
            tap_slop: self.tap_slop,
            ..TapConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = OverlayConfig::from_toml_str("").unwrap();
        assert_eq!(config, OverlayConfig::default());
        assert_eq!(config.mask_color, Color::BLACK.with_alpha(0.5));
        assert_eq!(config.mask_color.to_hex(), "#00000080");
        assert_eq!(config.default_duration(), Duration::from_millis(300));
        assert_eq!(config.cover_mode, CoverMode::FullInSuperView);
    }

    #[test]
    fn test_parse_all_fields() {
        let config = OverlayConfig::from_toml_str(
            r##"
            cover_mode = "cover-navigation-bar-level"
            mask_color = "#33669980"
            default_duration_ms = 250
            animated = false
            easing = "ease-out-cubic"
            tap_slop = 12.5
            tap_timeout_ms = 200
            "##,
        )
        .unwrap();

        assert_eq!(config.cover_mode, CoverMode::CoverNavigationBarLevel);
        assert_eq!(config.mask_color.to_hex(), "#33669980");
        assert_eq!(config.default_duration(), Duration::from_millis(250));
        assert!(!config.animated);
        assert_eq!(config.easing, Easing::EaseOutCubic);

        let tap = config.tap_config();
        assert_eq!(tap.tap_slop, 12.5);
        assert_eq!(tap.tap_timeout, Duration::from_millis(200));
    }

    #[test]
    fn test_bad_color_is_a_parse_error() {
        let err = OverlayConfig::from_toml_str(r##"mask_color = "#zz""##).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = OverlayConfig::from_toml_str("mask_opacity = 0.5").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = OverlayConfig::load("/nonexistent/side-drawer.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir()
            .join(format!("side-drawer-config-{}.toml", std::process::id()));
        std::fs::write(&path, "default_duration_ms = 120\n").unwrap();

        let config = OverlayConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.default_duration_ms, 120);
        assert!(config.animated);
    }
}
