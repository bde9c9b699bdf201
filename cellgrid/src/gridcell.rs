use std::fmt;
use std::hash::{Hash, Hasher};

use crate::gridpoint::GridPoint;

/// A single unit of grid content. The position is fixed at construction;
/// the contents are an opaque payload the grid never inspects.
pub struct GridCell<T> {
    grid_position: GridPoint,
    pub contents: T,
}

impl<T> GridCell<T> {
    pub(crate) fn new(grid_position: GridPoint, contents: T) -> Self {
        GridCell { grid_position, contents }
    }

    pub fn grid_position(&self) -> GridPoint {
        self.grid_position
    }
}

// Two cells at the same position are the same cell, whatever they hold.
impl<T> PartialEq for GridCell<T> {
    fn eq(&self, other: &Self) -> bool {
        self.grid_position == other.grid_position
    }
}

impl<T> Eq for GridCell<T> {}

impl<T> Hash for GridCell<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.grid_position.hash(state);
    }
}

impl<T> fmt::Debug for GridCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GridCell{}", self.grid_position)
    }
}
