//! Tile picking with highlight state.
//!
//! [`TilePicker`] owns the [`Grid`] and the "currently highlighted cell"
//! state. Every frame [`TilePicker::update`] restores the previous highlight,
//! asks for the hits of this frame's cursor ray (if there is a cursor),
//! picks the nearest one and highlights its cell.
//!
//! The picker never touches the scene directly. All colour changes go
//! through a [`CellColorSink`], so at most two `set_cell_color` calls happen
//! per frame: one restore and one highlight.

use bevy_ecs::prelude::Resource;
use log::warn;
use raylib::prelude::Color;

use crate::collision::{CollisionHit, RayPick, sort_nearest_first};
use crate::resources::grid::Grid;

/// The two colours a cell can be asked to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellColor {
    Default,
    Highlight,
}

/// The only mutation surface the picker needs from the scene.
pub trait CellColorSink {
    fn set_cell_color(&mut self, index: usize, color: CellColor);
}

/// Concrete colours for [`CellColor`], per scene.
#[derive(Resource, Debug, Clone, Copy)]
pub struct TilePalette {
    pub default: Color,
    pub highlight: Color,
}

impl Default for TilePalette {
    fn default() -> Self {
        Self {
            default: Color::WHITE,
            highlight: Color::new(0, 255, 255, 255),
        }
    }
}

impl TilePalette {
    pub fn new(default: Color, highlight: Color) -> Self {
        Self { default, highlight }
    }

    pub fn resolve(&self, color: CellColor) -> Color {
        match color {
            CellColor::Default => self.default,
            CellColor::Highlight => self.highlight,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct TilePicker {
    grid: Grid,
    current: Option<usize>,
}

impl TilePicker {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            current: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cell highlighted by the last update, if any.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Run one frame of picking.
    ///
    /// `query_hits` is only called when a cursor ray exists. Its hits may come
    /// back in any order; they are sorted nearest-first here. Each hit's
    /// target is the grid index of the tile it struck.
    pub fn update<Q, S>(&mut self, ray: Option<RayPick>, query_hits: Q, cells: &mut S) -> Option<usize>
    where
        Q: FnOnce(&RayPick) -> Vec<CollisionHit<usize>>,
        S: CellColorSink + ?Sized,
    {
        if let Some(previous) = self.current.take() {
            cells.set_cell_color(previous, CellColor::Default);
        }

        let Some(ray) = ray else {
            return None;
        };

        let mut hits = query_hits(&ray);
        if hits.is_empty() {
            return None;
        }
        sort_nearest_first(&mut hits);

        let nearest = hits[0].target;
        if !self.grid.contains(nearest) {
            warn!(
                "Pick hit cell {} outside {}x{} grid, ignoring",
                nearest,
                self.grid.width(),
                self.grid.height()
            );
            return None;
        }

        cells.set_cell_color(nearest, CellColor::Highlight);
        self.current = Some(nearest);
        self.current
    }
}
