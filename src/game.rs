//! Scene setup and frame scheduling.
//!
//! Three scenes are available:
//!
//! - [`Scene::Iso`] – a flat tile grid with cursor picking and a grid walker
//! - [`Scene::IsoWalls`] – the same grid, spaced out and bordered by walls
//! - [`Scene::Platformer`] – a side-view actor jumping between platforms
//!
//! [`setup_scene`] spawns a scene's entities and resources into a bare
//! [`World`]; [`register_observers`] wires the input observers it needs; and
//! [`add_simulation_systems`] adds its per-frame systems. Nothing here opens
//! a window, so the whole simulation can run headless in tests. The
//! raylib-facing systems (keyboard, cursor, drawing) are added by the binary
//! in the [`FrameSet::Input`] and [`FrameSet::Render`] sets.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::{Color, Vector3};

use crate::components::boxcollider::BoxCollider;
use crate::components::collision::FloorContacts;
use crate::components::gridwalker::GridWalker;
use crate::components::inputcontrolled::{CameraFollow, PlayerControlled};
use crate::components::kinematicactor::KinematicActor;
use crate::components::mapposition::MapPosition;
use crate::components::tile::{Platform, Tile};
use crate::components::tint::Tint;
use crate::events::input::{
    observe_app_actions, observe_control_flags, observe_grid_walker, observe_jump_request,
};
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::camera::Camera3DRes;
use crate::resources::cursor::CursorRay;
use crate::resources::framecontrol::FrameControl;
use crate::resources::gameconfig::{ConfigError, GameConfig};
use crate::resources::grid::{Grid, GridLayout};
use crate::resources::input::{ControlFlags, InputState};
use crate::resources::level::LevelLayout;
use crate::resources::tileindex::TileIndex;
use crate::resources::tilepicker::{TilePalette, TilePicker};
use crate::resources::worldtime::WorldTime;
use crate::systems::camera::camera_follow_system;
use crate::systems::collision::platform_collision_detector;
use crate::systems::movement::{kinematic_movement, sync_actor_transforms};
use crate::systems::picking::tile_picking_system;

/// Player collider, relative to the actor's feet.
const PLAYER_MIN: Vector3 = Vector3 { x: -1.0, y: -1.0, z: 0.0 };
const PLAYER_MAX: Vector3 = Vector3 { x: 1.0, y: 1.0, z: 4.0 };
const PLAYER_COLOR: Color = Color { r: 220, g: 60, b: 60, a: 255 };
const WALKER_COLOR: Color = Color { r: 255, g: 161, b: 0, a: 255 };

/// Platformer camera: fixed height and distance, tracks the actor along `x`.
const PLATFORMER_CAMERA_POSITION: Vector3 = Vector3 { x: 0.0, y: -65.0, z: 15.0 };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Scene {
    /// Flat tile grid with cursor picking.
    Iso,
    /// Tile grid with wall pieces along two edges.
    IsoWalls,
    /// Jump between platforms.
    #[default]
    Platformer,
}

impl Scene {
    pub fn grid_layout(&self) -> Option<GridLayout> {
        match self {
            Scene::Iso => Some(GridLayout::Flat),
            Scene::IsoWalls => Some(GridLayout::Walled),
            Scene::Platformer => None,
        }
    }
}

/// Frame phases. Chained in this order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Input,
    Simulate,
    Render,
}

/// Resources every scene needs.
pub fn setup_common(world: &mut World) {
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(InputState::default());
    world.insert_resource(ControlFlags::default());
    world.insert_resource(FrameControl::default());
    world.insert_resource(CursorRay::default());
}

pub fn setup_scene(
    world: &mut World,
    scene: Scene,
    config: &GameConfig,
    level: &LevelLayout,
) -> Result<(), ConfigError> {
    setup_common(world);
    match scene.grid_layout() {
        Some(layout) => setup_isometric(world, config, layout),
        None => setup_platformer(world, config, level),
    }
}

/// Spawn one tile per grid cell plus a grid walker, and the picking state.
pub fn setup_isometric(
    world: &mut World,
    config: &GameConfig,
    layout: GridLayout,
) -> Result<(), ConfigError> {
    let grid = Grid::new(config.grid_width, config.grid_height, layout)?;
    let palette = match layout {
        GridLayout::Flat => TilePalette::new(Color::WHITE, Color::new(0, 255, 255, 255)),
        GridLayout::Walled => TilePalette::new(Color::LIGHTGRAY, Color::new(255, 0, 0, 255)),
    };
    let spacing = layout.spacing();

    let mut index = TileIndex::default();
    for cell in grid.indices() {
        let (Some(shape), Some(origin)) = (grid.cell_shape(cell), grid.cell_origin(cell)) else {
            continue;
        };
        let entity = world
            .spawn((
                Tile::new(cell, shape),
                MapPosition::from_vec(origin),
                BoxCollider::centered(shape.size(spacing)),
                Tint::from_color(palette.default),
            ))
            .id();
        index.insert(cell, entity);
    }

    // The walker sits just in front of the tiles so it never hides a pick.
    let walker_size = Vector3::new(0.6, 0.6, 0.6) * spacing;
    world.spawn((
        GridWalker::new(spacing),
        MapPosition::new(0.0, -spacing, 0.0),
        BoxCollider::centered(walker_size),
        Tint::from_color(WALKER_COLOR),
    ));

    let center = grid.center();
    let reach = grid.width().max(grid.height()) as f32 * spacing;
    let eye = center + Vector3::new(-0.6 * reach, -1.4 * reach, 0.6 * reach);
    world.insert_resource(Camera3DRes::looking_at(eye, center));

    info!(
        "Isometric scene: {}x{} grid, {} tiles, {:?} layout",
        grid.width(),
        grid.height(),
        index.len(),
        layout
    );
    world.insert_resource(index);
    world.insert_resource(palette);
    world.insert_resource(TilePicker::new(grid));
    Ok(())
}

/// Spawn the level's platforms and the player actor.
pub fn setup_platformer(
    world: &mut World,
    config: &GameConfig,
    level: &LevelLayout,
) -> Result<(), ConfigError> {
    level.validate()?;
    config.physics.validate()?;

    for platform in level.platforms.iter() {
        let (min, max) = platform.local_bounds();
        world.spawn((
            Platform,
            BoxCollider::from_bounds(min, max),
            MapPosition::from_vec(platform.position()),
            Tint::from_color(platform.color()),
        ));
    }

    let start = level.start();
    world.spawn((
        KinematicActor::new(start, config.physics),
        BoxCollider::from_bounds(PLAYER_MIN, PLAYER_MAX),
        FloorContacts::default(),
        MapPosition::from_vec(start),
        Tint::from_color(PLAYER_COLOR),
        PlayerControlled,
        CameraFollow,
    ));

    let eye = PLATFORMER_CAMERA_POSITION;
    world.insert_resource(Camera3DRes::looking_at(
        eye,
        Vector3::new(eye.x, 0.0, eye.z),
    ));

    info!(
        "Platformer scene: {} platforms, player at ({:.1}, {:.1}, {:.1})",
        level.platforms.len(),
        start.x,
        start.y,
        start.z
    );
    Ok(())
}

/// Spawn the input observers for `scene`.
pub fn register_observers(world: &mut World, scene: Scene) {
    world.spawn(Observer::new(observe_control_flags));
    world.spawn(Observer::new(observe_app_actions));
    world.spawn(Observer::new(switch_debug_observer));
    match scene {
        Scene::Iso | Scene::IsoWalls => {
            world.spawn(Observer::new(observe_grid_walker));
        }
        Scene::Platformer => {
            world.spawn(Observer::new(observe_jump_request));
        }
    }
    // Observers must exist before the first system triggers an event.
    world.flush();
}

/// Add `scene`'s simulation systems in [`FrameSet::Simulate`], and chain the
/// frame sets.
pub fn add_simulation_systems(schedule: &mut Schedule, scene: Scene) {
    schedule.configure_sets((FrameSet::Input, FrameSet::Simulate, FrameSet::Render).chain());
    match scene {
        Scene::Iso | Scene::IsoWalls => {
            schedule.add_systems(tile_picking_system.in_set(FrameSet::Simulate));
        }
        Scene::Platformer => {
            schedule.add_systems(
                (
                    platform_collision_detector,
                    kinematic_movement,
                    sync_actor_transforms,
                    camera_follow_system,
                )
                    .chain()
                    .in_set(FrameSet::Simulate),
            );
        }
    }
}
