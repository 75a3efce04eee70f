//! Platformer level description.
//!
//! A [`LevelLayout`] lists the platforms of a level and where the player
//! starts. The built-in [`LevelLayout::default_level`] is used unless a JSON
//! file is given on the command line:
//!
//! ```json
//! {
//!   "player_start": [0.0, 0.0, 30.0],
//!   "platforms": [
//!     { "center_x": 0.0, "top": 0.0, "width": 120.0 },
//!     { "center_x": 12.0, "top": 6.0, "width": 10.0, "depth": 8.0 }
//!   ]
//! }
//! ```
//!
//! Platforms are boxes in the `x`/`z` plane; `top` is the height an actor
//! lands on.

use std::path::Path;

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Color, Vector3};
use serde::{Deserialize, Serialize};

use crate::resources::gameconfig::ConfigError;

fn default_depth() -> f32 {
    8.0
}

fn default_thickness() -> f32 {
    2.0
}

/// One platform box.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PlatformDef {
    pub center_x: f32,
    pub top: f32,
    pub width: f32,
    #[serde(default = "default_depth")]
    pub depth: f32,
    #[serde(default = "default_thickness")]
    pub thickness: f32,
}

impl PlatformDef {
    pub fn new(center_x: f32, top: f32, width: f32) -> Self {
        Self {
            center_x,
            top,
            width,
            depth: default_depth(),
            thickness: default_thickness(),
        }
    }

    /// Local-space corners relative to the platform's position
    /// `(center_x, 0, top)`.
    pub fn local_bounds(&self) -> (Vector3, Vector3) {
        (
            Vector3::new(-self.width * 0.5, -self.depth * 0.5, -self.thickness),
            Vector3::new(self.width * 0.5, self.depth * 0.5, 0.0),
        )
    }

    pub fn position(&self) -> Vector3 {
        Vector3::new(self.center_x, 0.0, self.top)
    }

    /// Ground-level slabs read darker than floating platforms.
    pub fn color(&self) -> Color {
        if self.top <= 0.0 {
            Color::new(90, 110, 90, 255)
        } else {
            Color::new(150, 120, 80, 255)
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LevelLayout {
    pub player_start: [f32; 3],
    pub platforms: Vec<PlatformDef>,
}

impl LevelLayout {
    /// A long floor with a staircase of floating platforms to the right.
    pub fn default_level() -> Self {
        let mut platforms = vec![PlatformDef::new(0.0, 0.0, 120.0)];
        for step in 0..5 {
            let step = step as f32;
            platforms.push(PlatformDef::new(10.0 + step * 12.0, 6.0 + step * 5.0, 8.0));
        }
        platforms.push(PlatformDef::new(-20.0, 8.0, 14.0));
        Self {
            player_start: [0.0, 0.0, 30.0],
            platforms,
        }
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let level: LevelLayout = serde_json::from_str(text)?;
        level.validate()?;
        Ok(level)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.platforms.is_empty() {
            return Err(ConfigError::EmptyLevel);
        }
        if let Some(value) = self.player_start.iter().copied().find(|v| !v.is_finite()) {
            return Err(ConfigError::NonFinite {
                name: "player_start",
                value,
            });
        }
        Ok(())
    }

    pub fn start(&self) -> Vector3 {
        let [x, y, z] = self.player_start;
        Vector3::new(x, y, z)
    }
}

impl Default for LevelLayout {
    fn default() -> Self {
        Self::default_level()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_is_valid() {
        let level = LevelLayout::default_level();
        assert!(level.validate().is_ok());
        assert_eq!(level.player_start, [0.0, 0.0, 30.0]);
        assert_eq!(level.platforms[0].top, 0.0);
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let level = LevelLayout::from_json(
            r#"{ "player_start": [1.0, 0.0, 5.0],
                 "platforms": [ { "center_x": 3.0, "top": 2.0, "width": 4.0 } ] }"#,
        )
        .unwrap();
        let p = level.platforms[0];
        assert_eq!(p.depth, 8.0);
        assert_eq!(p.thickness, 2.0);
        let (min, max) = p.local_bounds();
        assert_eq!(min.x, -2.0);
        assert_eq!(max.z, 0.0);
        assert_eq!(min.z, -2.0);
        assert_eq!(level.start().x, 1.0);
    }

    #[test]
    fn test_empty_level_rejected() {
        let err = LevelLayout::from_json(r#"{ "player_start": [0, 0, 0], "platforms": [] }"#);
        assert!(matches!(err, Err(ConfigError::EmptyLevel)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            LevelLayout::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_bundled_tower_level_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/levels/tower.json");
        let level = LevelLayout::load_from_file(path).unwrap();
        assert_eq!(level.platforms.len(), 6);
        assert_eq!(level.platforms[4].depth, 12.0);
        assert_eq!(level.platforms[5].thickness, 1.0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            LevelLayout::load_from_file("/nonexistent/level.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
