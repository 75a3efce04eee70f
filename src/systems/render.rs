//! Rendering.
//!
//! Every entity with a [`BoxCollider`], [`MapPosition`] and [`Tint`] is drawn
//! as a solid box in its tint. With [`DebugMode`] present the collider
//! outlines and a text overlay (picked cell, actor phase, camera) are drawn
//! on top.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::inputcontrolled::PlayerControlled;
use crate::components::kinematicactor::KinematicActor;
use crate::components::mapposition::MapPosition;
use crate::components::tint::Tint;
use crate::resources::camera::Camera3DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::tilepicker::TilePicker;

const BACKGROUND: Color = Color { r: 32, g: 32, b: 40, a: 255 };
const WIRE_COLOR: Color = Color { r: 0, g: 0, b: 0, a: 160 };
const TEXT_COLOR: Color = Color::RAYWHITE;

#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    camera: Res<Camera3DRes>,
    config: Res<GameConfig>,
    debug: Option<Res<DebugMode>>,
    picker: Option<Res<TilePicker>>,
    boxes: Query<(&BoxCollider, &MapPosition, &Tint)>,
    players: Query<&KinematicActor, With<PlayerControlled>>,
) {
    let mut d = rl.begin_drawing(&th);
    d.clear_background(BACKGROUND);

    {
        let mut d3 = d.begin_mode3D(camera.0);
        for (collider, position, tint) in boxes.iter() {
            let (center, size) = collider.center_and_size(position.pos);
            d3.draw_cube_v(center, size, tint.color);
            if debug.is_some() {
                d3.draw_cube_wires_v(center, size, WIRE_COLOR);
            }
        }
    }

    if config.show_fps {
        d.draw_fps(10, 10);
    }

    if debug.is_some() {
        let mut y = 40;
        if let Some(picker) = picker.as_ref() {
            let text = match picker.current().and_then(|i| picker.grid().coords(i).map(|c| (i, c))) {
                Some((index, (x, z))) => format!("Cell: {} ({}, {})", index, x, z),
                None => "Cell: none".to_string(),
            };
            d.draw_text(&text, 10, y, 10, TEXT_COLOR);
            y += 20;
        }
        for actor in players.iter() {
            let p = actor.position();
            let text = format!(
                "Actor: ({:.2}, {:.2}, {:.2}) {:?} jumps={}",
                p.x,
                p.y,
                p.z,
                actor.phase(),
                actor.jump.jump_count
            );
            d.draw_text(&text, 10, y, 10, TEXT_COLOR);
            y += 20;
        }
        let cam = camera.0;
        let cam_text = format!(
            "Camera: pos=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1})",
            cam.position.x, cam.position.y, cam.position.z, cam.target.x, cam.target.y, cam.target.z
        );
        d.draw_text(&cam_text, 10, y, 10, TEXT_COLOR);
    }
}
