//! Per-actor collision results.
//!
//! [`FloorContacts`] holds the platform contacts found for an actor this
//! frame, written by
//! [`platform_collision_detector`](crate::systems::collision::platform_collision_detector)
//! and consumed by [`kinematic_movement`](crate::systems::movement::kinematic_movement).

use bevy_ecs::prelude::{Component, Entity};
use smallvec::SmallVec;

use crate::collision::CollisionHit;

/// Platform contacts for this frame, nearest first. Targets are platform entities.
#[derive(Component, Clone, Debug, Default)]
pub struct FloorContacts {
    pub hits: SmallVec<[CollisionHit<Entity>; 4]>,
}

impl FloorContacts {
    pub fn clear(&mut self) {
        self.hits.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn as_slice(&self) -> &[CollisionHit<Entity>] {
        &self.hits
    }
}
