pub mod gridpoint;
pub mod gridsize;
pub mod gridcell;
pub mod grid;
pub mod error;

pub use gridpoint::GridPoint;
pub use gridsize::GridSize;
pub use gridcell::GridCell;
pub use grid::Grid;
pub use grid::Origin;
pub use grid::YAxis;
pub use error::GridError;
