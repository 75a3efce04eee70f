//! Tile picking integration tests on a headless world.

use bevy_ecs::prelude::*;
use raylib::prelude::{Color, Vector3};

use isoplat::collision::RayPick;
use isoplat::components::gridwalker::GridWalker;
use isoplat::components::mapposition::MapPosition;
use isoplat::components::tile::Tile;
use isoplat::components::tint::Tint;
use isoplat::game::{self, Scene};
use isoplat::resources::cursor::CursorRay;
use isoplat::resources::gameconfig::GameConfig;
use isoplat::resources::level::LevelLayout;
use isoplat::resources::tileindex::TileIndex;
use isoplat::resources::tilepicker::TilePicker;

fn make_world(scene: Scene) -> (World, Schedule) {
    let mut world = World::new();
    let config = GameConfig::new();
    game::setup_scene(&mut world, scene, &config, &LevelLayout::default_level()).unwrap();
    game::register_observers(&mut world, scene);
    let mut schedule = Schedule::default();
    game::add_simulation_systems(&mut schedule, scene);
    (world, schedule)
}

/// Ray shot along +y at world point `(x, _, z)`.
fn aim(world: &mut World, x: f32, z: f32) {
    world.resource_mut::<CursorRay>().0 = Some(RayPick::new(
        Vector3::new(x, -50.0, z),
        Vector3::new(0.0, 1.0, 0.0),
    ));
}

fn tile_colors(world: &mut World) -> Vec<(usize, Color)> {
    let mut query = world.query::<(&Tile, &Tint)>();
    let mut colors: Vec<(usize, Color)> = query.iter(world).map(|(t, c)| (t.index, c.color)).collect();
    colors.sort_by_key(|(i, _)| *i);
    colors
}

fn same(a: Color, b: Color) -> bool {
    a.r == b.r && a.g == b.g && a.b == b.b && a.a == b.a
}

#[test]
fn flat_grid_spawns_one_tile_per_cell() {
    let (mut world, _) = make_world(Scene::Iso);
    assert_eq!(world.resource::<TileIndex>().len(), 100);
    let mut walkers = world.query::<&GridWalker>();
    assert_eq!(walkers.iter(&world).count(), 1);
}

#[test]
fn flat_grid_highlights_cell_under_cursor() {
    let (mut world, mut schedule) = make_world(Scene::Iso);
    aim(&mut world, 3.0, 2.0);
    schedule.run(&mut world);

    assert_eq!(world.resource::<TilePicker>().current(), Some(23));
    let cyan = Color::new(0, 255, 255, 255);
    for (index, color) in tile_colors(&mut world) {
        if index == 23 {
            assert!(same(color, cyan));
        } else {
            assert!(same(color, Color::WHITE), "cell {} not restored", index);
        }
    }
}

#[test]
fn moving_cursor_moves_highlight() {
    let (mut world, mut schedule) = make_world(Scene::Iso);
    aim(&mut world, 3.0, 2.0);
    schedule.run(&mut world);
    aim(&mut world, 7.0, 9.0);
    schedule.run(&mut world);

    assert_eq!(world.resource::<TilePicker>().current(), Some(97));
    let highlighted: Vec<usize> = tile_colors(&mut world)
        .into_iter()
        .filter(|(_, c)| !same(*c, Color::WHITE))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(highlighted, vec![97]);
}

#[test]
fn cursor_leaving_window_clears_highlight() {
    let (mut world, mut schedule) = make_world(Scene::Iso);
    aim(&mut world, 0.0, 0.0);
    schedule.run(&mut world);
    assert_eq!(world.resource::<TilePicker>().current(), Some(0));

    world.resource_mut::<CursorRay>().0 = None;
    schedule.run(&mut world);
    assert_eq!(world.resource::<TilePicker>().current(), None);
    assert!(tile_colors(&mut world).iter().all(|(_, c)| same(*c, Color::WHITE)));
}

#[test]
fn cursor_between_tiles_picks_nothing() {
    let (mut world, mut schedule) = make_world(Scene::Iso);
    aim(&mut world, 3.5, 2.0);
    schedule.run(&mut world);
    assert_eq!(world.resource::<TilePicker>().current(), None);
}

#[test]
fn walled_grid_uses_wide_spacing_and_red_highlight() {
    let (mut world, mut schedule) = make_world(Scene::IsoWalls);
    aim(&mut world, 4.0, 10.0);
    schedule.run(&mut world);

    assert_eq!(world.resource::<TilePicker>().current(), Some(52));
    let red = Color::new(255, 0, 0, 255);
    let colors = tile_colors(&mut world);
    assert!(same(colors[52].1, red));
    assert!(same(colors[0].1, Color::LIGHTGRAY));
}

#[test]
fn walled_grid_wall_piece_is_pickable() {
    let (mut world, mut schedule) = make_world(Scene::IsoWalls);
    aim(&mut world, 0.0, 6.0);
    schedule.run(&mut world);
    assert_eq!(world.resource::<TilePicker>().current(), Some(30));
}

#[test]
fn grid_walker_is_never_picked() {
    let (mut world, mut schedule) = make_world(Scene::Iso);
    let walker_pos = {
        let mut q = world.query_filtered::<&MapPosition, With<GridWalker>>();
        q.single(&world).unwrap().pos
    };
    // The walker sits in front of cell 0; the ray passes through it first.
    aim(&mut world, walker_pos.x, walker_pos.z);
    schedule.run(&mut world);
    assert_eq!(world.resource::<TilePicker>().current(), Some(0));
}
