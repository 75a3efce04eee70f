//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides
//! defaults for safe startup, validation, and methods to load/save.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 120
//! vsync = true
//! show_fps = true
//!
//! [grid]
//! width = 10
//! height = 10
//!
//! [physics]
//! speed = 4
//! gravity = -0.05
//! jump_force = 1.2
//! friction = -0.12
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::kinematicactor::PhysicsConstants;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_SHOW_FPS: bool = true;
const DEFAULT_GRID_WIDTH: u32 = 10;
const DEFAULT_GRID_HEIGHT: u32 = 10;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Everything that can go wrong before the first frame.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load config file: {0}")]
    Load(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("friction must be negative, got {0}")]
    NonNegativeFriction(f32),
    #[error("physics constant `{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },
    #[error("level has no platforms")]
    EmptyLevel,
}

/// Game configuration resource.
///
/// Window settings, grid dimensions and physics constants. Values are read
/// once at startup; nothing here changes while a scene runs.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Draw the frame-rate meter.
    pub show_fps: bool,
    /// Tile grid columns.
    pub grid_width: u32,
    /// Tile grid rows.
    pub grid_height: u32,
    /// Platformer integration constants.
    pub physics: PhysicsConstants,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            show_fps: DEFAULT_SHOW_FPS,
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            physics: PhysicsConstants::default(),
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
    /// Missing values retain their current (default) values. Loading does
    /// not validate; call [`GameConfig::validate`] afterwards.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config.load(&self.config_path).map_err(ConfigError::Load)?;
        self.apply_ini(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, grid={}x{}, physics={:?}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.grid_width,
            self.grid_height,
            self.physics
        );

        Ok(())
    }

    /// Load configuration from INI text. Used by tests and embedded defaults.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config.read(text.to_string()).map_err(ConfigError::Load)?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }
        if let Some(show_fps) = config.getbool("window", "show_fps").ok().flatten() {
            self.show_fps = show_fps;
        }

        // [grid] section
        if let Some(width) = config.getuint("grid", "width").ok().flatten() {
            self.grid_width = width as u32;
        }
        if let Some(height) = config.getuint("grid", "height").ok().flatten() {
            self.grid_height = height as u32;
        }

        // [physics] section
        if let Some(speed) = config.getfloat("physics", "speed").ok().flatten() {
            self.physics.speed = speed as f32;
        }
        if let Some(gravity) = config.getfloat("physics", "gravity").ok().flatten() {
            self.physics.gravity = gravity as f32;
        }
        if let Some(jump_force) = config.getfloat("physics", "jump_force").ok().flatten() {
            self.physics.jump_force = jump_force as f32;
        }
        if let Some(friction) = config.getfloat("physics", "friction").ok().flatten() {
            self.physics.friction = friction as f32;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), ConfigError> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));
        config.set("window", "show_fps", Some(self.show_fps.to_string()));

        // [grid] section
        config.set("grid", "width", Some(self.grid_width.to_string()));
        config.set("grid", "height", Some(self.grid_height.to_string()));

        // [physics] section
        config.set("physics", "speed", Some(self.physics.speed.to_string()));
        config.set("physics", "gravity", Some(self.physics.gravity.to_string()));
        config.set("physics", "jump_force", Some(self.physics.jump_force.to_string()));
        config.set("physics", "friction", Some(self.physics.friction.to_string()));

        config.write(&self.config_path)?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Reject settings the scenes cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        self.physics.validate()
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.window_size(), (1280, 720));
        assert_eq!(config.grid_width, 10);
        assert_eq!(config.grid_height, 10);
        assert!(approx_eq(config.physics.speed, 4.0));
        assert!(approx_eq(config.physics.gravity, -0.05));
        assert!(approx_eq(config.physics.jump_force, 1.2));
        assert!(approx_eq(config.physics.friction, -0.12));
    }

    #[test]
    fn test_load_from_str_overrides_present_keys_only() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[grid]\nwidth = 4\n\n[physics]\nfriction = -0.5\n")
            .unwrap();
        assert_eq!(config.grid_width, 4);
        assert_eq!(config.grid_height, 10);
        assert!(approx_eq(config.physics.friction, -0.5));
        assert!(approx_eq(config.physics.speed, 4.0));
    }

    #[test]
    fn test_load_window_section() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[window]\nwidth = 800\nheight = 600\nvsync = false\nshow_fps = false\n")
            .unwrap();
        assert_eq!(config.window_size(), (800, 600));
        assert!(!config.vsync);
        assert!(!config.show_fps);
    }

    #[test]
    fn test_validate_rejects_positive_friction() {
        let mut config = GameConfig::new();
        config.physics.friction = 0.12;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonNegativeFriction(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_friction() {
        let mut config = GameConfig::new();
        config.physics.friction = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_grid() {
        let mut config = GameConfig::new();
        config.grid_height = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyGrid { width: 10, height: 0 })
        ));
    }

    #[test]
    fn test_bundled_config_matches_defaults() {
        let mut config = GameConfig::with_path(concat!(env!("CARGO_MANIFEST_DIR"), "/config.ini"));
        config.load_from_file().unwrap();
        assert!(config.validate().is_ok());
        let defaults = PhysicsConstants::default();
        assert!(approx_eq(config.physics.gravity, defaults.gravity));
        assert!(approx_eq(config.physics.jump_force, defaults.jump_force));
        assert!(approx_eq(config.physics.friction, defaults.friction));
        assert_eq!(config.window_size(), (1280, 720));
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let mut config = GameConfig::with_path("./definitely/not/here/config.ini");
        assert!(matches!(config.load_from_file(), Err(ConfigError::Load(_))));
        // defaults untouched
        assert_eq!(config.grid_width, 10);
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("isoplat-config-{}.ini", std::process::id()));
        let mut config = GameConfig::with_path(&path);
        config.grid_width = 7;
        config.physics.gravity = -0.2;
        config.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded.grid_width, 7);
        assert!(approx_eq(loaded.physics.gravity, -0.2));
        let _ = std::fs::remove_file(&path);
    }
}
