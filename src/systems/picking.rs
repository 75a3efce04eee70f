//! Cursor picking systems for the isometric scenes.
//!
//! [`update_cursor_ray`] turns the mouse position into a world ray once per
//! frame. [`tile_picking_system`] feeds that ray to the
//! [`TilePicker`], which recolours tiles through [`TileTints`].
use bevy_ecs::prelude::*;

use crate::collision::{CollisionHit, RayPick};
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::tile::Tile;
use crate::components::tint::Tint;
use crate::resources::camera::Camera3DRes;
use crate::resources::cursor::CursorRay;
use crate::resources::tileindex::TileIndex;
use crate::resources::tilepicker::{CellColor, CellColorSink, TilePalette, TilePicker};

/// Build this frame's pick ray, or `None` when the cursor left the window.
pub fn update_cursor_ray(
    rl: NonSend<raylib::RaylibHandle>,
    camera: Res<Camera3DRes>,
    mut cursor: ResMut<CursorRay>,
) {
    cursor.0 = if rl.is_cursor_on_screen() {
        let ray = rl.get_screen_to_world_ray(rl.get_mouse_position(), camera.0);
        Some(RayPick::from(ray))
    } else {
        None
    };
}

/// Ray-test every tile collider. Hits come back in iteration order.
pub fn pick_tiles<'a>(
    ray: &RayPick,
    tiles: impl IntoIterator<Item = (&'a Tile, &'a BoxCollider, &'a MapPosition)>,
) -> Vec<CollisionHit<usize>> {
    tiles
        .into_iter()
        .filter_map(|(tile, collider, position)| {
            collider
                .ray_distance(position.pos, ray)
                .map(|distance| CollisionHit::new(tile.index, distance, ray.point_at(distance)))
        })
        .collect()
}

/// Colour sink writing palette colours into tile [`Tint`]s.
pub struct TileTints<'a, 'w, 's> {
    pub index: &'a TileIndex,
    pub palette: &'a TilePalette,
    pub tints: &'a mut Query<'w, 's, &'static mut Tint, With<Tile>>,
}

impl CellColorSink for TileTints<'_, '_, '_> {
    fn set_cell_color(&mut self, index: usize, color: CellColor) {
        let Some(entity) = self.index.get(index) else {
            log::warn!("No tile entity for cell {}", index);
            return;
        };
        if let Ok(mut tint) = self.tints.get_mut(entity) {
            tint.color = self.palette.resolve(color);
        }
    }
}

pub fn tile_picking_system(
    mut picker: ResMut<TilePicker>,
    cursor: Res<CursorRay>,
    palette: Res<TilePalette>,
    index: Res<TileIndex>,
    colliders: Query<(&Tile, &BoxCollider, &MapPosition)>,
    mut tints: Query<&'static mut Tint, With<Tile>>,
) {
    let mut sink = TileTints {
        index: &index,
        palette: &palette,
        tints: &mut tints,
    };
    picker.update(cursor.0, |ray| pick_tiles(ray, colliders.iter()), &mut sink);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::grid::TileShape;
    use raylib::prelude::Vector3;

    #[test]
    fn test_pick_tiles_reports_hit_cells_only() {
        let collider = BoxCollider::centered(Vector3::new(0.96, 0.05, 0.96));
        let tiles = [
            (Tile::new(0, TileShape::Top), collider, MapPosition::new(0.0, 0.0, 0.0)),
            (Tile::new(1, TileShape::Top), collider, MapPosition::new(1.0, 0.0, 0.0)),
            (Tile::new(2, TileShape::Top), collider, MapPosition::new(2.0, 0.0, 0.0)),
        ];
        let ray = RayPick::new(Vector3::new(1.0, -10.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        let hits = pick_tiles(&ray, tiles.iter().map(|(t, c, p)| (t, c, p)));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].target, 1);
        assert!((hits[0].distance - 9.975).abs() < 1e-4);
    }
}
