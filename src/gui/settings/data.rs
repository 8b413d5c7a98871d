use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};

pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub dark_mode: bool,
    pub zoom_factor: f32,
    pub deck_path: Option<PathBuf>, // None means the built-in words
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { dark_mode: true, zoom_factor: 1.25, deck_path: None }
    }
}

impl SettingsData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamped so a hand-edited settings file cannot make the window unusable.
    pub fn effective_zoom(&self) -> f32 {
        if self.zoom_factor.is_finite() {
            self.zoom_factor.clamp(0.5, 3.0)
        } else {
            Self::default().zoom_factor
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{
        load_json_in,
        save_json_in,
    };

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: SettingsData = serde_json::from_str(r#"{ "dark_mode": false }"#).unwrap();
        assert!(!settings.dark_mode);
        assert_eq!(settings.zoom_factor, SettingsData::default().zoom_factor);
        assert!(settings.deck_path.is_none());
    }

    #[test]
    fn test_effective_zoom() {
        let mut settings = SettingsData::new();
        settings.zoom_factor = 12.0;
        assert_eq!(settings.effective_zoom(), 3.0);
        settings.zoom_factor = f32::NAN;
        assert_eq!(settings.effective_zoom(), 1.25);
    }

    #[test]
    fn test_settings_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let settings = SettingsData {
            dark_mode: false,
            zoom_factor: 1.5,
            deck_path: Some(PathBuf::from("decks/market.json")),
        };

        save_json_in(dir.path(), &settings, SETTINGS_FILE).unwrap();
        let loaded: SettingsData = load_json_in(dir.path(), SETTINGS_FILE).unwrap();
        assert_eq!(loaded, settings);
    }
}
