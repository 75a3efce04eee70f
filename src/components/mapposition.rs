//! Rendered world-space placement of an entity.
//!
//! For kinematic actors this is a projection of
//! [`KinematicState::position`](crate::components::kinematicactor::KinematicState),
//! rewritten every frame by [`sync_actor_transforms`](crate::systems::movement::sync_actor_transforms).
//! Static scenery (tiles, platforms) owns its `MapPosition` directly.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector3;

#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector3,
}

impl MapPosition {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            pos: Vector3::new(x, y, z),
        }
    }

    pub fn from_vec(pos: Vector3) -> Self {
        Self { pos }
    }
}
