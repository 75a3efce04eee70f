//! Tile and platform components.
//!
//! A [`Tile`] is one pickable grid cell; its `index` is the cell's grid
//! index and is what a picking hit reports. A [`Platform`] is solid
//! geometry kinematic actors can stand on.

use bevy_ecs::prelude::Component;

use crate::resources::grid::TileShape;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub index: usize,
    pub shape: TileShape,
}

impl Tile {
    pub fn new(index: usize, shape: TileShape) -> Self {
        Self { index, shape }
    }
}

/// Marker for platform geometry.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Platform;
