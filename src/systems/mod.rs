//! Engine systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! rendering.
//!
//! Submodules overview
//! - [`camera`] – keep the camera level with the followed actor
//! - [`collision`] – gather platform contacts for kinematic actors
//! - [`input`] – read hardware input and trigger input events
//! - [`movement`] – step kinematic actors and sync their positions
//! - [`picking`] – build the cursor ray and highlight the picked tile
//! - [`render`] – draw boxes and debug overlays using Raylib
//! - [`time`] – update simulation time and delta

pub mod camera;
pub mod collision;
pub mod input;
pub mod movement;
pub mod picking;
pub mod render;
pub mod time;
