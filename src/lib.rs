//! Isoplat library.
//!
//! Two small 3D demos on raylib and bevy_ecs: cursor picking over an
//! isometric tile grid, and a side-view platformer with a double jump.
//! Everything except window, keyboard and drawing runs on a bare
//! [`bevy_ecs::world::World`], which is what the integration tests use.

pub mod collision;
pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
