use cellgrid::{Grid, GridPoint, Origin, YAxis};

use crate::scenepoint::{CellSize, ScenePoint};

/// Converts between continuous scene-space points and discrete grid
/// positions. Borrows the grid; owns no grid state of its own.
pub struct SceneMapper<'g, T> {
    grid: &'g Grid<T>,
    cell_size: CellSize,
}

impl<'g, T> SceneMapper<'g, T> {
    pub fn new(grid: &'g Grid<T>, cell_size: CellSize) -> Self {
        SceneMapper { grid, cell_size }
    }

    pub fn grid(&self) -> &'g Grid<T> {
        self.grid
    }

    pub fn cell_size(&self) -> CellSize {
        self.cell_size
    }

    /// The grid position whose cell covers the given scene point, or None
    /// when the point falls outside the grid. No clamping happens here.
    ///
    /// The width's parity selects the rounding rule for both axes, so a
    /// grid with mixed-parity dimensions inherits the width behavior on y.
    pub fn scene_to_grid(&self, point: ScenePoint) -> Option<GridPoint> {
        let converted = self.convert(point);

        if self.grid.is_on_grid(converted) {
            Some(converted)
        } else {
            None
        }
    }

    /// Pure per-axis scale. Placing the result relative to the scene's
    /// origin is the renderer's concern, not the mapper's.
    pub fn grid_to_scene(&self, position: GridPoint) -> ScenePoint {
        ScenePoint::new(
            position.x as f32 * self.cell_size.width,
            position.y as f32 * self.cell_size.height,
        )
    }

    // Raw conversion with no bounds check. The region selector range-scans
    // from corners that may land past the grid edge.
    pub(crate) fn convert(&self, point: ScenePoint) -> GridPoint {
        let even_width = self.grid.size().width % 2 == 0;

        let x = if even_width {
            away_from_zero(point.x / self.cell_size.width)
        } else {
            let half_cell = -sign(point.x) * self.cell_size.width / 2.0;
            ((point.x - half_cell) / self.cell_size.width).trunc()
        };

        let y = if even_width {
            away_from_zero(point.y / self.cell_size.height)
        } else {
            let half_cell = -sign(point.y) * self.cell_size.height / 2.0;
            ((point.y - half_cell) / self.cell_size.height).trunc()
        };

        let y_flip = if self.grid.y_axis() == YAxis::UpIsPositive { -1.0 } else { 1.0 };
        let centered = GridPoint::new(x as i32, (y * y_flip) as i32);

        if self.grid.origin() == Origin::Center {
            centered
        } else {
            centered
                + GridPoint::new(self.grid.size().width / 2, self.grid.size().height / 2)
        }
    }
}

fn away_from_zero(v: f32) -> f32 {
    v.abs().ceil().copysign(v)
}

fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
