//! Kinematic actor: per-frame integrator plus platform collision response.
//!
//! A [`KinematicActor`] owns the [`KinematicState`] of one controlled entity,
//! its [`JumpState`], and the [`PhysicsConstants`] it integrates with. The
//! vertical axis is `z`.
//!
//! Each frame [`KinematicActor::step`] runs, in this exact order:
//!
//! 1. `acceleration = (0, 0, gravity)`
//! 2. right held: `acceleration.x = speed * dt`; left held:
//!    `acceleration.x = -speed * dt` (left wins when both are held)
//! 3. `acceleration.x += velocity.x * friction`
//! 4. `velocity += acceleration`
//! 5. `position += velocity + acceleration * 0.5`
//! 6. floor contacts, nearest first (see [`KinematicActor::resolve_floor_hits`])
//!
//! Gravity and friction are per-frame quantities; only the input
//! acceleration is scaled by `dt`.

use bevy_ecs::prelude::Component;
use log::debug;
use raylib::prelude::Vector3;
use smallvec::SmallVec;

use crate::collision::{CollisionHit, sort_nearest_first};
use crate::components::jumpstate::{JumpPhase, JumpState};
use crate::resources::gameconfig::ConfigError;
use crate::resources::input::ControlFlags;

const DEFAULT_SPEED: f32 = 4.0;
const DEFAULT_GRAVITY: f32 = -0.05;
const DEFAULT_JUMP_FORCE: f32 = 1.2;
const DEFAULT_FRICTION: f32 = -0.12;

/// Integration constants for a [`KinematicActor`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConstants {
    /// Horizontal input acceleration, per second.
    pub speed: f32,
    /// Vertical acceleration applied every frame.
    pub gravity: f32,
    /// Vertical velocity set by a jump.
    pub jump_force: f32,
    /// Horizontal velocity damping coefficient. Must be negative.
    pub friction: f32,
}

impl Default for PhysicsConstants {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            gravity: DEFAULT_GRAVITY,
            jump_force: DEFAULT_JUMP_FORCE,
            friction: DEFAULT_FRICTION,
        }
    }
}

impl PhysicsConstants {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("speed", self.speed),
            ("gravity", self.gravity),
            ("jump_force", self.jump_force),
            ("friction", self.friction),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        if self.friction >= 0.0 {
            return Err(ConfigError::NonNegativeFriction(self.friction));
        }
        Ok(())
    }
}

/// Position, velocity and acceleration of one actor.
///
/// `position` is the single source of truth for where the actor is; the
/// rendered [`MapPosition`](crate::components::mapposition::MapPosition) is
/// copied from it and never written independently.
#[derive(Debug, Clone, Copy)]
pub struct KinematicState {
    pub position: Vector3,
    pub velocity: Vector3,
    pub acceleration: Vector3,
}

impl Default for KinematicState {
    fn default() -> Self {
        Self::at(Vector3::zero())
    }
}

impl KinematicState {
    /// At rest at `position`.
    pub fn at(position: Vector3) -> Self {
        Self {
            position,
            velocity: Vector3::zero(),
            acceleration: Vector3::zero(),
        }
    }
}

#[derive(Component, Clone, Debug)]
pub struct KinematicActor {
    pub state: KinematicState,
    pub jump: JumpState,
    pub physics: PhysicsConstants,
}

impl KinematicActor {
    /// Create an actor at rest and grounded.
    pub fn new(position: Vector3, physics: PhysicsConstants) -> Self {
        Self {
            state: KinematicState::at(position),
            jump: JumpState::default(),
            physics,
        }
    }

    pub fn position(&self) -> Vector3 {
        self.state.position
    }

    pub fn phase(&self) -> JumpPhase {
        self.jump.phase
    }

    /// Advance one frame and resolve this frame's floor contacts.
    ///
    /// `floor_hits` may come in any order; they are resolved nearest first.
    pub fn step<T: Copy>(
        &mut self,
        dt: f32,
        flags: ControlFlags,
        floor_hits: &[CollisionHit<T>],
    ) -> KinematicState {
        self.jump.begin_frame();
        self.integrate(dt, flags);
        let grounded = self.resolve_floor_hits(floor_hits);
        self.jump.update_phase(self.state.velocity.z, grounded);
        self.state
    }

    /// Steps 1–5 of the frame update.
    pub fn integrate(&mut self, dt: f32, flags: ControlFlags) {
        let physics = self.physics;
        let state = &mut self.state;

        state.acceleration = Vector3::new(0.0, 0.0, physics.gravity);

        if flags.right {
            state.acceleration.x = physics.speed * dt;
        }
        if flags.left {
            state.acceleration.x = -physics.speed * dt;
        }

        // Only horizontal movement is damped.
        state.acceleration.x += state.velocity.x * physics.friction;
        state.velocity += state.acceleration;
        state.position += state.velocity + state.acceleration * 0.5;
    }

    /// Apply floor contacts. Returns true if the actor was snapped onto a
    /// surface this frame.
    ///
    /// For each contact while descending (`velocity.z < 0`): a grounded-style
    /// contact snaps `position.z` to the surface and zeroes `velocity.z`;
    /// during a jump-initiated ascent the contact only clears `is_jumping`,
    /// letting the actor leave the platform it jumped from.
    pub fn resolve_floor_hits<T: Copy>(&mut self, floor_hits: &[CollisionHit<T>]) -> bool {
        let mut ordered: SmallVec<[CollisionHit<T>; 4]> = floor_hits.iter().copied().collect();
        sort_nearest_first(&mut ordered);

        let mut grounded = false;
        for hit in ordered.iter() {
            if self.state.velocity.z >= 0.0 {
                continue;
            }
            if !self.jump.is_jumping {
                if !self.jump.is_on_floor {
                    debug!("Landed at z={:.2}", hit.world_position.z);
                }
                self.state.position.z = hit.world_position.z;
                self.state.velocity.z = 0.0;
                self.jump.land();
                grounded = true;
            } else {
                self.jump.is_jumping = false;
            }
        }
        grounded
    }

    /// Jump if the budget allows it. Returns whether the impulse was applied.
    pub fn request_jump(&mut self) -> bool {
        if !self.jump.take_off() {
            debug!("Jump ignored, budget spent");
            return false;
        }
        self.state.velocity.z = self.physics.jump_force;
        debug!(
            "Jump: vz={:.2} count={} phase={:?}",
            self.state.velocity.z, self.jump.jump_count, self.jump.phase
        );
        true
    }
}
