//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the scene: position, colliders, colour, the platformer actor and the
//! markers that connect entities to input and the camera.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned box collider for picking and contacts
//! - [`collision`] – per-actor floor contacts gathered each frame
//! - [`gridwalker`] – entity that steps across the tile grid on arrow presses
//! - [`inputcontrolled`] – markers for jump input and camera tracking
//! - [`jumpstate`] – jump phase and double-jump budget
//! - [`kinematicactor`] – frame-stepped platformer body and its physics
//! - [`mapposition`] – world-space position for an entity
//! - [`tile`] – grid tile identity and platform marker
//! - [`tint`] – draw colour

pub mod boxcollider;
pub mod collision;
pub mod gridwalker;
pub mod inputcontrolled;
pub mod jumpstate;
pub mod kinematicactor;
pub mod mapposition;
pub mod tile;
pub mod tint;
