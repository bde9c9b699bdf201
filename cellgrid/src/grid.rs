use std::fmt;

use rand::Rng;

use crate::error::GridError;
use crate::gridcell::GridCell;
use crate::gridpoint::GridPoint;
use crate::gridsize::GridSize;

/// Where the logical (0, 0) sits within the grid.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub enum Origin {
    Center,
    LowerLeft,
    UpperLeft,
}

/// Which way y grows in the frame the grid is presented in.
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub enum YAxis {
    UpIsPositive,
    UpIsNegative,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Center => write!(f, "center"),
            Origin::LowerLeft => write!(f, "lower-left"),
            Origin::UpperLeft => write!(f, "upper-left"),
        }
    }
}

impl fmt::Display for YAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YAxis::UpIsPositive => write!(f, "up-positive"),
            YAxis::UpIsNegative => write!(f, "up-negative"),
        }
    }
}

/// A fixed-size rectangular grid of cells, addressable by position under
/// the chosen origin/axis convention. The backing storage is allocated
/// once and never resizes; only cell contents may change afterwards.
pub struct Grid<T> {
    size: GridSize,
    origin: Origin,
    y_axis: YAxis,
    wrap: bool,
    cells: Vec<GridCell<T>>,
}

impl<T> Grid<T> {
    /// Upper-left origin with y growing downward, no wrapping.
    pub fn new(size: GridSize, contents: impl FnMut(GridPoint) -> T) -> Result<Self, GridError> {
        Self::with_layout(size, Origin::UpperLeft, YAxis::UpIsNegative, false, contents)
    }

    /// Center origin with y growing upward. Width and height must be odd.
    pub fn centered(
        size: GridSize,
        wrap: bool,
        contents: impl FnMut(GridPoint) -> T,
    ) -> Result<Self, GridError> {
        Self::with_layout(size, Origin::Center, YAxis::UpIsPositive, wrap, contents)
    }

    /// Full control over origin, axis and wrapping. The contents factory
    /// runs exactly once per cell, in absolute-index order, with the
    /// position computed for that index.
    pub fn with_layout(
        size: GridSize,
        origin: Origin,
        y_axis: YAxis,
        wrap: bool,
        mut contents: impl FnMut(GridPoint) -> T,
    ) -> Result<Self, GridError> {
        if size.width < 0 || size.height < 0 {
            return Err(GridError::InvalidSize { size });
        }

        match origin {
            Origin::Center => {
                if size.width % 2 == 0 || size.height % 2 == 0 {
                    return Err(GridError::EvenCenterSize { size });
                }
            }
            Origin::LowerLeft => {
                if y_axis != YAxis::UpIsPositive {
                    return Err(GridError::AxisMismatch { origin, y_axis });
                }
            }
            Origin::UpperLeft => {
                if y_axis != YAxis::UpIsNegative {
                    return Err(GridError::AxisMismatch { origin, y_axis });
                }
            }
        }

        if wrap && origin != Origin::Center {
            return Err(GridError::WrapUnsupported { origin });
        }

        let area = size.area() as usize;
        let mut cells = Vec::with_capacity(area);
        for index in 0..area {
            let position = position_for(index, size, origin);
            cells.push(GridCell::new(position, contents(position)));
        }

        Ok(Grid { size, origin, y_axis, wrap, cells })
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn y_axis(&self) -> YAxis {
        self.y_axis
    }

    pub fn wraps(&self) -> bool {
        self.wrap
    }

    pub fn cells(&self) -> &[GridCell<T>] {
        &self.cells
    }

    /// For iterating over all the cells in absolute-index order. Each call
    /// starts a fresh traversal from index 0.
    pub fn iter(&self) -> std::slice::Iter<'_, GridCell<T>> {
        self.cells.iter()
    }

    pub fn position_of(&self, absolute_index: usize) -> Result<GridPoint, GridError> {
        if absolute_index >= self.cells.len() {
            return Err(GridError::IndexOutOfRange {
                index: absolute_index,
                area: self.cells.len(),
            });
        }

        Ok(position_for(absolute_index, self.size, self.origin))
    }

    pub fn is_on_grid(&self, position: GridPoint) -> bool {
        match self.origin {
            Origin::Center => {
                let hw = self.size.width / 2;
                let hh = self.size.height / 2;
                (-hw..=hw).contains(&position.x) && (-hh..=hh).contains(&position.y)
            }
            Origin::LowerLeft | Origin::UpperLeft => {
                (0..self.size.width).contains(&position.x)
                    && (0..self.size.height).contains(&position.y)
            }
        }
    }

    pub fn cell_at(&self, position: GridPoint) -> Result<&GridCell<T>, GridError> {
        let index = self.index_of(position)?;
        Ok(&self.cells[index])
    }

    pub fn cell_at_mut(&mut self, position: GridPoint) -> Result<&mut GridCell<T>, GridError> {
        let index = self.index_of(position)?;
        Ok(&mut self.cells[index])
    }

    pub fn cell_at_index(&self, absolute_index: usize) -> Result<&GridCell<T>, GridError> {
        let position = self.position_of(absolute_index)?;
        self.cell_at(position)
    }

    /// Picks a cell uniformly from the grid's coordinate span. Defined
    /// only for center-origin grids.
    pub fn random_cell(&self, rng: &mut impl Rng) -> Result<&GridCell<T>, GridError> {
        if self.origin != Origin::Center {
            return Err(GridError::RandomUnsupported { origin: self.origin });
        }

        let hw = self.size.width / 2;
        let hh = self.size.height / 2;
        let x = rng.gen_range(-hw..=hw);
        let y = rng.gen_range(-hh..=hh);

        self.cell_at(GridPoint::new(x, y))
    }

    /// The cells of a centered rectangular window, walked from (left, top)
    /// to (right, bottom). Defined only for center-origin grids; positions
    /// past the edge fold back when wrapping is enabled and fail otherwise.
    pub fn subgrid(
        &self,
        center: GridPoint,
        size: GridSize,
    ) -> Result<Vec<&GridCell<T>>, GridError> {
        if self.origin != Origin::Center {
            return Err(GridError::SubgridUnsupported { origin: self.origin });
        }

        let hw = size.width / 2;
        let hh = size.height / 2;
        let mut window = Vec::new();

        for y in -hh..=hh {
            for x in -hw..=hw {
                // -y so the walk starts at the top row of the window
                let offset = GridPoint::new(x, -y);
                window.push(self.cell_at(center + offset)?);
            }
        }

        Ok(window)
    }

    fn index_of(&self, position: GridPoint) -> Result<usize, GridError> {
        let on_grid = self.wrap_to_grid(position);
        if !self.is_on_grid(on_grid) {
            return Err(GridError::OffGrid { position });
        }

        let w = self.size.width;
        let index = match self.origin {
            Origin::UpperLeft => on_grid.y * w + on_grid.x,
            Origin::LowerLeft => (self.size.height - 1 - on_grid.y) * w + on_grid.x,
            Origin::Center => {
                let yy = self.size.height / 2 - on_grid.y;
                yy * w + (w / 2 + on_grid.x)
            }
        };

        Ok(index as usize)
    }

    fn wrap_to_grid(&self, position: GridPoint) -> GridPoint {
        if !self.wrap {
            return position;
        }

        // Construction guarantees wrapping implies a center origin.
        GridPoint::new(
            fold(position.x, self.size.width),
            fold(position.y, self.size.height),
        )
    }
}

impl<T> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-origin grid", self.size, self.origin)
    }
}

fn position_for(absolute_index: usize, size: GridSize, origin: Origin) -> GridPoint {
    let i = absolute_index as i32;

    match origin {
        Origin::UpperLeft => GridPoint::new(i % size.width, i / size.width),
        Origin::LowerLeft => {
            GridPoint::new(i % size.width, size.height - 1 - i / size.width)
        }
        Origin::Center => {
            let hw = size.width / 2;
            let hh = size.height / 2;
            GridPoint::new(i % size.width - hw, hh - i / size.width)
        }
    }
}

// Truncating remainder folded into the span (-extent/2, extent/2], so any
// integer coordinate lands on its canonical on-grid representative.
fn fold(a: i32, extent: i32) -> i32 {
    let r = a % extent;

    if r > extent / 2 {
        r - extent
    } else if r < -(extent / 2) {
        r + extent
    } else {
        r
    }
}
