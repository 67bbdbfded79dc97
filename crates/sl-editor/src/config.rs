//! Editor configuration

use serde::{Deserialize, Serialize};

/// Tunable editor settings.
///
/// Geometry constants (extrusion height, solid elevation) are fixed in
/// `sl_core::constants`; everything here is presentation-adjacent and safe
/// to change between sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Diameter of vertex edit handles
    pub vertex_marker_diameter: f32,
    /// Diameter of draft point markers
    pub draft_marker_diameter: f32,
    /// Alpha channel of randomly assigned material colors
    pub solid_alpha: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            vertex_marker_diameter: 0.3,
            draft_marker_diameter: 0.2,
            solid_alpha: 1.0,
        }
    }
}

impl EditorConfig {
    /// Load settings from the platform config directory, or return
    /// defaults if not found
    pub fn load() -> Self {
        if let Some(dirs) = directories::ProjectDirs::from("com", "sketchlift", "sketchlift") {
            let config_path = dirs.config_dir().join("settings.json");
            if let Ok(json) = std::fs::read_to_string(&config_path)
                && let Ok(config) = serde_json::from_str(&json)
            {
                return config;
            }
        }
        Self::default()
    }

    /// Save settings to the platform config directory
    pub fn save(&self) {
        if let Some(dirs) = directories::ProjectDirs::from("com", "sketchlift", "sketchlift") {
            let config_dir = dirs.config_dir();
            if std::fs::create_dir_all(config_dir).is_ok() {
                let config_path = config_dir.join("settings.json");
                if let Ok(json) = serde_json::to_string_pretty(self) {
                    let _ = std::fs::write(config_path, json);
                }
            }
        }
    }
}
