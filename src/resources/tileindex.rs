//! Lookup from grid cell index to the tile entity occupying it.
//!
//! Filled once by the isometric scene setup. The picker's colour sink uses it
//! to reach the [`Tint`](crate::components::tint::Tint) of a cell in O(1).

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::FxHashMap;

#[derive(Resource, Debug, Default)]
pub struct TileIndex {
    entities: FxHashMap<usize, Entity>,
}

impl TileIndex {
    pub fn insert(&mut self, index: usize, entity: Entity) {
        if let Some(previous) = self.entities.insert(index, entity) {
            log::warn!("Cell {} was already bound to {:?}, rebinding", index, previous);
        }
    }

    pub fn get(&self, index: usize) -> Option<Entity> {
        self.entities.get(&index).copied()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
