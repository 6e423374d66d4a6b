//! Viewer configuration resource.
//!
//! Manages viewer settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//!
//! [gesture]
//! sensitivity = 5.0
//! resume_from_last = false
//!
//! [orientation]
//! invert_pitch = true
//!
//! [globe]
//! radius = 0.25
//! label_offset_y = -0.3
//!
//! [view]
//! force_flat = false
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::dragtracker::{DEFAULT_SENSITIVITY, GestureTuning};
use crate::components::globe::DEFAULT_GLOBE_RADIUS;
use crate::composer::OrientationTuning;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_RESUME_FROM_LAST: bool = false;
const DEFAULT_INVERT_PITCH: bool = true;
const DEFAULT_LABEL_OFFSET_Y: f32 = -0.3;
const DEFAULT_FORCE_FLAT: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./habitatglobe.ini";

/// Viewer configuration resource.
///
/// Stores window settings, the gesture and orientation constants, and the
/// globe layout. Inserted once at startup; systems read it through `Res`.
#[derive(Resource, Debug, Clone)]
pub struct ViewerConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Spin radians per scene unit of drag.
    pub sensitivity: f64,
    /// New drags continue from the previous spin.
    pub resume_from_last: bool,
    /// Negate the pitch angle when composing.
    pub invert_pitch: bool,
    /// Globe radius in scene units.
    pub globe_radius: f32,
    /// Vertical offset of the label from the globe center.
    pub label_offset_y: f32,
    /// Use the flat strategy even when 3D interaction is available.
    pub force_flat: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            sensitivity: DEFAULT_SENSITIVITY,
            resume_from_last: DEFAULT_RESUME_FROM_LAST,
            invert_pitch: DEFAULT_INVERT_PITCH,
            globe_radius: DEFAULT_GLOBE_RADIUS,
            label_offset_y: DEFAULT_LABEL_OFFSET_Y,
            force_flat: DEFAULT_FORCE_FLAT,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Values that
    /// would break the viewer (non-positive sizes, non-finite constants) are
    /// ignored with a warning. Returns an error if the file cannot be read or
    /// parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, sensitivity={}, resume_from_last={}, invert_pitch={}, radius={}, force_flat={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.sensitivity,
            self.resume_from_last,
            self.invert_pitch,
            self.globe_radius,
            self.force_flat
        );

        Ok(())
    }

    /// Parse configuration from INI text (same rules as [`Self::load_from_file`]).
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = positive_uint(config, "window", "width") {
            self.window_width = width;
        }
        if let Some(height) = positive_uint(config, "window", "height") {
            self.window_height = height;
        }
        if let Some(fps) = positive_uint(config, "window", "target_fps") {
            self.target_fps = fps;
        }

        // [gesture] section
        if let Some(sensitivity) = config.getfloat("gesture", "sensitivity").ok().flatten() {
            if sensitivity.is_finite() && sensitivity > 0.0 {
                self.sensitivity = sensitivity;
            } else {
                warn!("Ignoring invalid gesture.sensitivity = {}", sensitivity);
            }
        }
        if let Some(resume) = config.getbool("gesture", "resume_from_last").ok().flatten() {
            self.resume_from_last = resume;
        }

        // [orientation] section
        if let Some(invert) = config.getbool("orientation", "invert_pitch").ok().flatten() {
            self.invert_pitch = invert;
        }

        // [globe] section
        if let Some(radius) = config.getfloat("globe", "radius").ok().flatten() {
            if radius.is_finite() && radius > 0.0 {
                self.globe_radius = radius as f32;
            } else {
                warn!("Ignoring invalid globe.radius = {}", radius);
            }
        }
        if let Some(offset) = config.getfloat("globe", "label_offset_y").ok().flatten() {
            if offset.is_finite() {
                self.label_offset_y = offset as f32;
            } else {
                warn!("Ignoring invalid globe.label_offset_y = {}", offset);
            }
        }

        // [view] section
        if let Some(flat) = config.getbool("view", "force_flat").ok().flatten() {
            self.force_flat = flat;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        // [gesture] section
        config.set("gesture", "sensitivity", Some(self.sensitivity.to_string()));
        config.set(
            "gesture",
            "resume_from_last",
            Some(self.resume_from_last.to_string()),
        );

        // [orientation] section
        config.set(
            "orientation",
            "invert_pitch",
            Some(self.invert_pitch.to_string()),
        );

        // [globe] section
        config.set("globe", "radius", Some(self.globe_radius.to_string()));
        config.set(
            "globe",
            "label_offset_y",
            Some(self.label_offset_y.to_string()),
        );

        // [view] section
        config.set("view", "force_flat", Some(self.force_flat.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    pub fn gesture_tuning(&self) -> GestureTuning {
        GestureTuning {
            sensitivity: self.sensitivity,
            resume_from_last: self.resume_from_last,
        }
    }

    pub fn orientation_tuning(&self) -> OrientationTuning {
        OrientationTuning {
            invert_pitch: self.invert_pitch,
        }
    }
}

fn positive_uint(config: &Ini, section: &str, key: &str) -> Option<u32> {
    let value = config.getuint(section, key).ok().flatten()?;
    match u32::try_from(value) {
        Ok(v) if v > 0 => Some(v),
        _ => {
            warn!("Ignoring invalid {}.{} = {}", section, key, value);
            None
        }
    }
}
