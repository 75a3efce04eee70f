//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `camera` – shared 3D camera used for picking and drawing
//! - `cursor` – this frame's pick ray under the mouse
//! - `debugmode` – presence toggles debug overlays
//! - `framecontrol` – whether the frame loop keeps running
//! - `gameconfig` – window, grid and physics settings from `config.ini`
//! - `grid` – tile grid geometry and cell indexing
//! - `input` – key bindings and the platformer's control flags
//! - `level` – platformer level layout, built in or loaded from JSON
//! - `tileindex` – cell index to tile entity lookup
//! - `tilepicker` – highlighted-cell state and colour palette
//! - `worldtime` – simulation time and delta
pub mod camera;
pub mod cursor;
pub mod debugmode;
pub mod framecontrol;
pub mod gameconfig;
pub mod grid;
pub mod input;
pub mod level;
pub mod tileindex;
pub mod tilepicker;
pub mod worldtime;
