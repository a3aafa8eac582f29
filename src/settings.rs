use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::render::ViewportSettings;
use crate::sketches::SketchKind;
use crate::MandalaApp;

/// Returns the path to the settings file: `~/.config/mandala-rs/settings.json`
fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("mandala-rs");
    path.push("settings.json");
    path
}

/// Persisted application settings.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    // Canvas
    pub canvas_width: u32,
    pub canvas_height: u32,

    // Playback
    pub sketch: SketchKind,
    pub running: bool,

    // Files
    pub asset_dir: Option<PathBuf>,
    pub custom_path: Option<PathBuf>,

    // Display
    pub show_settings: bool,
    pub limit_to_native: bool,
    pub show_border: bool,
    pub pixelated: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        let viewport = ViewportSettings::default();
        Self {
            canvas_width: 1000,
            canvas_height: 600,

            sketch: SketchKind::default(),
            running: true,

            asset_dir: None,
            custom_path: None,

            show_settings: true,
            limit_to_native: viewport.limit_to_native,
            show_border: viewport.show_border,
            pixelated: viewport.pixelated,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse settings ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk as pretty JSON.
    pub fn save(&self) {
        self.save_to(&settings_path());
    }

    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Failed to create config directory: {}", e);
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    log::warn!("Failed to write settings: {}", e);
                }
            }
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
            }
        }
    }

    /// Canvas size, never smaller than one pixel
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.canvas_width.max(1), self.canvas_height.max(1))
    }

    /// Extract current settings from the running application.
    pub fn from_app(app: &MandalaApp) -> Self {
        let (canvas_width, canvas_height) = app.canvas.size();
        let viewport = &app.viewport.settings;
        Self {
            canvas_width,
            canvas_height,

            sketch: app.sketch_kind,
            running: app.running,

            asset_dir: app.assets.dir().map(Path::to_path_buf),
            custom_path: app.custom_path.clone(),

            show_settings: app.show_settings,
            limit_to_native: viewport.limit_to_native,
            show_border: viewport.show_border,
            pixelated: viewport.pixelated,
        }
    }

    /// Apply loaded settings to the application.
    ///
    /// Only stores the values; the caller restarts the sketch.
    pub fn apply(&self, app: &mut MandalaApp) {
        let (width, height) = self.canvas_size();
        app.canvas.resize(width, height);
        app.viewport.reset();
        app.viewport.settings.limit_to_native = self.limit_to_native;
        app.viewport.settings.show_border = self.show_border;
        app.viewport.settings.pixelated = self.pixelated;

        app.sketch_kind = self.sketch;
        app.running = self.running;

        app.assets = crate::sketches::Assets::from_dir(self.asset_dir.clone());
        app.custom_path = self.custom_path.clone();

        app.show_settings = self.show_settings;
    }
}
