//! Shared 3D camera resource.
//!
//! Wraps raylib's [`Camera3D`] so the cursor-ray, camera-follow and render
//! systems agree on one view. The world is `z`-up, so scene cameras are
//! built with `up = (0, 0, 1)`.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera3D, Vector3};

/// Vertical field of view used by the demo cameras, in degrees.
pub const DEFAULT_FOVY: f32 = 45.0;

#[derive(Resource)]
pub struct Camera3DRes(pub Camera3D);

impl Camera3DRes {
    /// Perspective camera at `position` looking at `target`, `z` up.
    pub fn looking_at(position: Vector3, target: Vector3) -> Self {
        Self(Camera3D::perspective(
            position,
            target,
            Vector3::new(0.0, 0.0, 1.0),
            DEFAULT_FOVY,
        ))
    }

    /// Slide the camera along `x`, keeping its viewing direction.
    pub fn follow_x(&mut self, x: f32) {
        let dx = x - self.0.position.x;
        self.0.position.x = x;
        self.0.target.x += dx;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_x_keeps_direction() {
        let mut cam = Camera3DRes::looking_at(Vector3::new(0.0, -65.0, 15.0), Vector3::new(0.0, 0.0, 15.0));
        cam.follow_x(12.5);
        assert_eq!(cam.0.position.x, 12.5);
        assert_eq!(cam.0.target.x, 12.5);
        assert_eq!(cam.0.position.y, -65.0);
        assert_eq!(cam.0.target.y, 0.0);
    }
}
