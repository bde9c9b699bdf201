use cellgrid::{Grid, GridCell, GridPoint};

use crate::mapper::SceneMapper;
use crate::scenepoint::ScenePoint;

/// Resolves a rubber-band rectangle, given as any two opposite corners in
/// scene space, into the cells whose centers it covers.
pub struct RegionSelector<'g, T> {
    mapper: SceneMapper<'g, T>,
}

impl<'g, T> RegionSelector<'g, T> {
    pub fn new(mapper: SceneMapper<'g, T>) -> Self {
        RegionSelector { mapper }
    }

    pub fn grid(&self) -> &'g Grid<T> {
        self.mapper.grid()
    }

    /// The covered cells, grouped by x ascending with each column's y range
    /// ascending, each cell exactly once. Corners may arrive in any of the
    /// four diagonal orders and may lie past the grid edge; only on-grid
    /// positions are collected.
    pub fn overlapped_cells(
        &self,
        corner_a: ScenePoint,
        corner_b: ScenePoint,
    ) -> Vec<&'g GridCell<T>> {
        // Canonicalize each axis on its own. This is not a whole-point
        // swap: a drag toward the upper left mixes coordinates from both
        // corners.
        let virtual_start = ScenePoint::new(
            corner_a.x.min(corner_b.x),
            corner_a.y.max(corner_b.y),
        );
        let virtual_end = ScenePoint::new(
            corner_a.x.max(corner_b.x),
            corner_a.y.min(corner_b.y),
        );

        let start = self.mapper.convert(virtual_start);
        let end = self.mapper.convert(virtual_end);

        let first_x = start.x.min(end.x);
        let last_x = start.x.max(end.x);
        let first_y = start.y.min(end.y);
        let last_y = start.y.max(end.y);

        let grid = self.mapper.grid();
        let mut covered = Vec::new();

        for x in first_x..=last_x {
            for y in first_y..=last_y {
                let position = GridPoint::new(x, y);
                if !grid.is_on_grid(position) {
                    continue;
                }

                if let Ok(cell) = grid.cell_at(position) {
                    covered.push(cell);
                }
            }
        }

        covered
    }
}
