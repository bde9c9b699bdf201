use cellgrid::Grid;
use gridscene::{CellSize, SceneMapper, ScenePoint};

use crate::Highlight;

// Rows come out in backing-array order, which is already top to bottom.
pub fn render(grid: &Grid<Highlight>) -> String {
    let width = grid.size().width;
    if width <= 0 {
        return String::new();
    }

    let mut out = String::new();
    for (i, cell) in grid.iter().enumerate() {
        out.push(if cell.contents.lit { '#' } else { '.' });
        if (i + 1) % width as usize == 0 {
            out.push('\n');
        } else {
            out.push(' ');
        }
    }

    out
}

pub fn readout(grid: &Grid<Highlight>, cell_size: CellSize, position: ScenePoint) -> String {
    let mapper = SceneMapper::new(grid, cell_size);

    match mapper.scene_to_grid(position) {
        Some(on_grid) => format!("{}", on_grid),
        None => String::from("Out of bounds"),
    }
}
