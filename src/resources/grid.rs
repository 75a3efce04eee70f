//! Tile grid geometry.
//!
//! A [`Grid`] is a fixed `width × height` arrangement of cells. Cells are
//! addressed by a dense, 0-based index `z * width + x` (row-major, `z`
//! outermost), stable for the grid's lifetime. The grid never resizes.
//!
//! The [`GridLayout`] decides where each cell sits in the world:
//!
//! - [`GridLayout::Flat`] – cell `(x, z)` at `(x, 0, z)`, all top tiles
//! - [`GridLayout::Walled`] – spacing 2, with a corner piece at the origin,
//!   a left wall along `x == 0` and a right wall along `z == 0`

use raylib::prelude::Vector3;

use crate::resources::gameconfig::ConfigError;

/// Visual/collision shape of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileShape {
    Top,
    LeftWall,
    RightWall,
    Corner,
}

impl TileShape {
    /// Collider size for this shape, given the layout spacing.
    ///
    /// Tiles face the camera along `-y`; wall pieces are thicker blocks so
    /// they read as a raised border.
    pub fn size(&self, spacing: f32) -> Vector3 {
        let face = spacing * 0.96;
        match self {
            TileShape::Top => Vector3::new(face, 0.05, face),
            TileShape::LeftWall | TileShape::RightWall | TileShape::Corner => {
                Vector3::new(face, spacing * 0.5, face)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridLayout {
    #[default]
    Flat,
    Walled,
}

impl GridLayout {
    /// World distance between neighbouring cell centres.
    pub fn spacing(&self) -> f32 {
        match self {
            GridLayout::Flat => 1.0,
            GridLayout::Walled => 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    layout: GridLayout,
}

impl Grid {
    /// Create a grid. Both dimensions must be positive.
    pub fn new(width: u32, height: u32, layout: GridLayout) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }
        Ok(Self {
            width,
            height,
            layout,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// A valid grid is never empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.len()
    }

    /// Index of cell `(x, z)`, if it lies inside the grid.
    pub fn index(&self, x: u32, z: u32) -> Option<usize> {
        if x >= self.width || z >= self.height {
            return None;
        }
        Some(z as usize * self.width as usize + x as usize)
    }

    /// `(x, z)` coordinates of a cell index.
    pub fn coords(&self, index: usize) -> Option<(u32, u32)> {
        if !self.contains(index) {
            return None;
        }
        let w = self.width as usize;
        Some(((index % w) as u32, (index / w) as u32))
    }

    /// All cell indices in ascending order.
    pub fn indices(&self) -> std::ops::Range<usize> {
        0..self.len()
    }

    pub fn cell_shape(&self, index: usize) -> Option<TileShape> {
        let (x, z) = self.coords(index)?;
        let shape = match self.layout {
            GridLayout::Flat => TileShape::Top,
            GridLayout::Walled => match (x, z) {
                (0, 0) => TileShape::Corner,
                (0, _) => TileShape::LeftWall,
                (_, 0) => TileShape::RightWall,
                _ => TileShape::Top,
            },
        };
        Some(shape)
    }

    /// World position of a cell's centre.
    pub fn cell_origin(&self, index: usize) -> Option<Vector3> {
        let (x, z) = self.coords(index)?;
        let s = self.layout.spacing();
        Some(Vector3::new(x as f32 * s, 0.0, z as f32 * s))
    }

    /// World position of the grid's centre, for aiming cameras.
    pub fn center(&self) -> Vector3 {
        let s = self.layout.spacing();
        Vector3::new(
            (self.width - 1) as f32 * s * 0.5,
            0.0,
            (self.height - 1) as f32 * s * 0.5,
        )
    }
}
