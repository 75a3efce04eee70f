//! Input-controlled markers.
//!
//! - [`PlayerControlled`] – the actor receives jump requests from input
//! - [`CameraFollow`] – the camera tracks this actor's horizontal position
//!
//! Horizontal movement itself needs no marker: every
//! [`KinematicActor`](crate::components::kinematicactor::KinematicActor) reads the
//! shared [`ControlFlags`](crate::resources::input::ControlFlags).

use bevy_ecs::prelude::Component;

/// Jump requests from the keyboard go to entities with this marker.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct PlayerControlled;

/// The active camera follows this entity along `x`.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct CameraFollow;
