//! Visual style preferences
//!
//! Only affects how the court is painted, never the rules. Persisted in
//! LocalStorage on the web and read once at startup.

use serde::{Deserialize, Serialize};

use crate::renderer::Font;
use crate::{Rgba, colors};

/// Court style settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Color the surface is cleared to each frame
    pub background: Rgba,

    // === Net ===
    pub net_color: Rgba,
    pub net_width: f32,
    /// Height of one dash
    pub net_segment_height: f32,
    /// Distance from the top of one dash to the top of the next
    pub net_spacing: f32,

    // === Scores ===
    pub score_color: Rgba,
    pub score_font: Font,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            background: colors::BLACK,

            net_color: colors::WHITE,
            net_width: 5.0,
            net_segment_height: 10.0,
            net_spacing: 15.0,

            score_color: colors::GRAY,
            score_font: Font {
                size: 120.0,
                weight: "bold".to_string(),
                family: "Courier New".to_string(),
            },
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "canvas_pong_settings";

    /// Parse settings JSON; fields that are missing keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native has no storage; always the defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_court() {
        let settings = Settings::default();
        assert_eq!(settings.background, colors::BLACK);
        assert_eq!(settings.net_spacing, 15.0);
        assert_eq!(settings.net_segment_height, 10.0);
        assert_eq!(settings.score_font.size, 120.0);
        assert_eq!(settings.score_font.family, "Courier New");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "net_width": 8.0 }"#).unwrap();
        assert_eq!(settings.net_width, 8.0);
        assert_eq!(settings.net_color, colors::WHITE);
        assert_eq!(settings.score_font, Settings::default().score_font);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json("not json").is_err());
        assert!(Settings::from_json(r#"{ "net_width": "wide" }"#).is_err());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_native_load_is_default() {
        assert_eq!(Settings::load(), Settings::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut settings = Settings::default();
        settings.score_color = [0.2, 0.4, 0.6, 1.0];
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}
