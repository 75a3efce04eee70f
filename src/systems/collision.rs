//! Platform contact detection.
//!
//! For every kinematic actor, gather the platforms its collider currently
//! touches and store them, nearest first, in the actor's [`FloorContacts`].
//! Contacts are measured from the actor's position *before* this frame's
//! step, so an actor resting on a platform keeps touching it.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector3;

use crate::collision::{CollisionHit, sort_nearest_first};
use crate::components::boxcollider::BoxCollider;
use crate::components::collision::FloorContacts;
use crate::components::kinematicactor::KinematicActor;
use crate::components::mapposition::MapPosition;
use crate::components::tile::Platform;

/// Contact between an actor collider and one platform, if they touch.
///
/// The hit sits on the platform's top face below the actor; its distance is
/// how far the actor's feet are from that face.
pub fn platform_contact(
    actor_collider: &BoxCollider,
    actor_position: Vector3,
    platform: Entity,
    platform_collider: &BoxCollider,
    platform_position: Vector3,
) -> Option<CollisionHit<Entity>> {
    if !actor_collider.touches(actor_position, platform_collider, platform_position) {
        return None;
    }
    let top = platform_collider.top(platform_position);
    let feet = actor_collider.aabb(actor_position).0.z;
    Some(CollisionHit::new(
        platform,
        (feet - top).abs(),
        Vector3::new(actor_position.x, actor_position.y, top),
    ))
}

pub fn platform_collision_detector(
    mut actors: Query<(&KinematicActor, &BoxCollider, &mut FloorContacts)>,
    platforms: Query<(Entity, &BoxCollider, &MapPosition), With<Platform>>,
) {
    for (actor, collider, mut contacts) in actors.iter_mut() {
        contacts.clear();
        let position = actor.position();
        for (entity, platform_collider, platform_position) in platforms.iter() {
            if let Some(hit) =
                platform_contact(collider, position, entity, platform_collider, platform_position.pos)
            {
                contacts.hits.push(hit);
            }
        }
        sort_nearest_first(&mut contacts.hits);
    }
}
