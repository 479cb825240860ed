//! Grid components - cells and the map they belong to

use serde::{Deserialize, Serialize};

use crate::Error;

/// Discrete cell of the search grid
///
/// Cells have value equality and a stable hash, which is what lets
/// the frontier key its open and closed sets on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

impl GridCell {
    pub const fn new(x: i32, y: i32) -> Self {
        GridCell { x, y }
    }
}

/// Rectangular map a search runs over
///
/// The frontier keeps a handle to it for the driver's benefit and
/// never inspects it; adjacency and terrain are the driver's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridMap {
    width: usize,
    height: usize,
}

impl GridMap {
    pub fn new(width: usize, height: usize) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidArgument(format!(
                "map dimensions must be non-zero, got {width}x{height}"
            )));
        }
        Ok(GridMap { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `cell` lies within the map bounds
    pub fn contains(&self, cell: GridCell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.width
            && (cell.y as usize) < self.height
    }
}
