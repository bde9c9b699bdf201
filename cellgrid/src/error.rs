use thiserror::Error;

use crate::grid::{Origin, YAxis};
use crate::gridpoint::GridPoint;
use crate::gridsize::GridSize;

/// Contract violations. Every variant marks a misuse at the call site,
/// not a runtime condition worth retrying.
#[derive(Error, PartialEq, Eq, Debug, Copy, Clone)]
pub enum GridError {
    #[error("grid dimensions cannot be negative, got {size}")]
    InvalidSize { size: GridSize },

    #[error("center-origin grid needs a cell at (0, 0): width and height must both be odd, got {size}")]
    EvenCenterSize { size: GridSize },

    #[error("{origin}-origin grid does not support the {y_axis} y-axis")]
    AxisMismatch { origin: Origin, y_axis: YAxis },

    #[error("wrapping is allowed only for center-origin grids, got {origin}")]
    WrapUnsupported { origin: Origin },

    #[error("position {position} is off the grid")]
    OffGrid { position: GridPoint },

    #[error("absolute index {index} is out of range for a grid of {area} cells")]
    IndexOutOfRange { index: usize, area: usize },

    #[error("subgrids are defined only for center-origin grids, got {origin}")]
    SubgridUnsupported { origin: Origin },

    #[error("random cells are defined only for center-origin grids, got {origin}")]
    RandomUnsupported { origin: Origin },
}
