//! Isoplat main entry point.
//!
//! Opens a raylib window and runs one of the demo scenes on a bevy_ecs
//! world:
//!
//! - `iso` – flat tile grid; the tile under the cursor is highlighted and
//!   the arrow keys move a cube across the grid
//! - `iso-walls` – the same with wall pieces along two edges
//! - `platformer` – arrow keys run, Up jumps (twice in the air)
//!
//! # Main Loop
//!
//! 1. Load `config.ini` and, for the platformer, the optional level JSON
//! 2. Open the window, set up the scene, register observers and systems
//! 3. Each frame: advance time, poll input, simulate, draw
//! 4. Stop when the window closes or Escape is pressed
//!
//! F11 toggles the debug overlay.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- iso
//! RUST_LOG=debug cargo run -- platformer --level level.json
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};

use isoplat::game::{self, FrameSet, Scene};
use isoplat::resources::debugmode::DebugMode;
use isoplat::resources::framecontrol::FrameControl;
use isoplat::resources::gameconfig::{ConfigError, GameConfig};
use isoplat::resources::level::LevelLayout;
use isoplat::systems::input::update_input_state;
use isoplat::systems::picking::update_cursor_ray;
use isoplat::systems::render::render_system;
use isoplat::systems::time::update_world_time;

/// Isometric tile picking and platformer demos.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Scene to run.
    #[arg(value_enum, default_value_t = Scene::Platformer)]
    scene: Scene,

    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Platformer level JSON. The built-in level is used when omitted.
    #[arg(long, value_name = "PATH")]
    level: Option<PathBuf>,

    /// Start with the debug overlay enabled.
    #[arg(long)]
    debug: bool,
}

fn load_config(path: Option<PathBuf>) -> Result<GameConfig, ConfigError> {
    let explicit = path.is_some();
    let mut config = match path {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        if explicit {
            return Err(e);
        }
        warn!("Using default config: {}", e);
    }
    config.validate()?;
    Ok(config)
}

fn load_level(path: Option<PathBuf>) -> Result<LevelLayout, ConfigError> {
    match path {
        Some(path) => {
            let level = LevelLayout::load_from_file(&path)?;
            info!("Loaded level {:?}", path);
            Ok(level)
        }
        None => Ok(LevelLayout::default_level()),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match load_config(cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    let level = match load_level(cli.level) {
        Ok(level) => level,
        Err(e) => {
            error!("Invalid level: {}", e);
            std::process::exit(1);
        }
    };

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .title("Isoplat");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // Escape is handled as an input action
    rl.set_exit_key(None);

    // --------------- ECS world + scene ---------------
    let mut world = World::new();
    if let Err(e) = game::setup_scene(&mut world, cli.scene, &config, &level) {
        error!("Failed to set up {:?}: {}", cli.scene, e);
        std::process::exit(1);
    }
    if cli.debug {
        world.insert_resource(DebugMode {});
    }
    world.insert_resource(config);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
    game::register_observers(&mut world, cli.scene);

    let mut update = Schedule::default();
    game::add_simulation_systems(&mut update, cli.scene);
    update.add_systems((update_input_state, update_cursor_ray).chain().in_set(FrameSet::Input));
    update.add_systems(render_system.in_set(FrameSet::Render));

    if let Err(e) = update.initialize(&mut world) {
        error!("Failed to initialize schedule: {}", e);
        std::process::exit(1);
    }

    info!("Running {:?}", cli.scene);

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && world.resource::<FrameControl>().should_continue()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();
    }
    info!("Bye");
}
