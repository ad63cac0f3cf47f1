// config.rs
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::error::{EditorError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Diagram viewBox size.
    #[serde(default = "default_view_width")]  pub view_width: f32,
    #[serde(default = "default_view_height")] pub view_height: f32,

    #[serde(default = "default_marker_radius")]       pub marker_radius: f32,
    #[serde(default = "default_active_marker_scale")] pub active_marker_scale: f32,
    /// Pointer-down pick radius, diagram units.
    #[serde(default = "default_hit_radius")]   pub hit_radius: f32,
    #[serde(default = "default_stroke_width")] pub stroke_width: f32,
    #[serde(default)]                          pub show_labels: bool,

    #[serde(default = "default_line_color")]       pub line_color: [u8; 3],
    #[serde(default = "default_marker_color")]     pub marker_color: [u8; 3],
    #[serde(default = "default_active_color")]     pub active_color: [u8; 3],
    #[serde(default = "default_background_color")] pub background_color: [u8; 3],

    #[serde(default = "default_export_dir")] pub export_dir: PathBuf,
}

fn default_view_width() -> f32 { 400.0 }
fn default_view_height() -> f32 { 600.0 }
fn default_marker_radius() -> f32 { 5.0 }
fn default_active_marker_scale() -> f32 { 1.25 }
fn default_hit_radius() -> f32 { 12.0 }
fn default_stroke_width() -> f32 { 2.0 }
fn default_line_color() -> [u8; 3] { [100, 150, 255] }
fn default_marker_color() -> [u8; 3] { [255, 160, 0] }
fn default_active_color() -> [u8; 3] { [255, 50, 180] }
fn default_background_color() -> [u8; 3] { [15, 15, 15] }
fn default_export_dir() -> PathBuf { PathBuf::from(".") }

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            view_width: default_view_width(),
            view_height: default_view_height(),
            marker_radius: default_marker_radius(),
            active_marker_scale: default_active_marker_scale(),
            hit_radius: default_hit_radius(),
            stroke_width: default_stroke_width(),
            show_labels: false,
            line_color: default_line_color(),
            marker_color: default_marker_color(),
            active_color: default_active_color(),
            background_color: default_background_color(),
            export_dir: default_export_dir(),
        }
    }
}

impl EditorConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|source| EditorError::Parse {
            name: path.display().to_string(),
            source,
        })
    }

    /// Falls back to defaults (with a warning) when the file is absent or malformed.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else { return Self::default() };
        match Self::load(path) {
            Ok(cfg) => {
                tracing::info!(path = %path.display(), "loaded editor config");
                cfg
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "using default config: {e}");
                Self::default()
            }
        }
    }
}
