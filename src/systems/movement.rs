//! Kinematic movement.
//!
//! [`kinematic_movement`] advances every [`KinematicActor`] one frame using
//! the shared [`ControlFlags`] and the contacts gathered by
//! [`platform_collision_detector`](crate::systems::collision::platform_collision_detector).
//! [`sync_actor_transforms`] then copies the simulated position into
//! [`MapPosition`] for rendering and camera tracking.
use bevy_ecs::prelude::*;

use crate::components::collision::FloorContacts;
use crate::components::jumpstate::JumpPhase;
use crate::components::kinematicactor::KinematicActor;
use crate::components::mapposition::MapPosition;
use crate::resources::input::ControlFlags;
use crate::resources::worldtime::WorldTime;

pub fn kinematic_movement(
    time: Res<WorldTime>,
    flags: Res<ControlFlags>,
    mut query: Query<(&mut KinematicActor, &FloorContacts)>,
) {
    let flags = *flags;
    for (mut actor, contacts) in query.iter_mut() {
        let before = actor.phase();
        actor.step(time.delta, flags, contacts.as_slice());
        let after = actor.phase();
        if before != after && after == JumpPhase::Falling {
            log::trace!("Falling from z={:.2}", actor.position().z);
        }
    }
}

pub fn sync_actor_transforms(mut query: Query<(&KinematicActor, &mut MapPosition)>) {
    for (actor, mut position) in query.iter_mut() {
        position.pos = actor.position();
    }
}
