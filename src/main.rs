use std::error::Error;

use cellgrid::{Grid, GridPoint, GridSize};
use gridscene::{
    CellSize, DragTracker, RegionSelector, SceneMapper, ScenePoint, SelectionStage,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod panel;

pub struct Highlight {
    pub lit: bool,
}

const GRID_SIZE: GridSize = GridSize::new(5, 5);
const CELL_SIZE: CellSize = CellSize::square(10.0);

// One recorded gesture sweeping from the lower-left corner across the
// whole grid, the way a pointer drag arrives from the input layer.
const DRAG_SCRIPT: [(ScenePoint, ScenePoint); 4] = [
    (ScenePoint::new(-25.0, -25.0), ScenePoint::new(-8.0, -8.0)),
    (ScenePoint::new(-25.0, -25.0), ScenePoint::new(3.0, 6.0)),
    (ScenePoint::new(-25.0, -25.0), ScenePoint::new(14.0, 2.0)),
    (ScenePoint::new(-25.0, -25.0), ScenePoint::new(25.0, 25.0)),
];

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut grid = Grid::centered(GRID_SIZE, false, |_| Highlight { lit: false })?;
    let mut tracker = DragTracker::new();
    let mut stage = SelectionStage::new();

    println!(
        "{}, {} x {} pixel cells",
        grid, CELL_SIZE.width, CELL_SIZE.height
    );

    for (start, end) in DRAG_SCRIPT {
        tracker.drag_to(start, end);

        let Some((from, to)) = tracker.vertices() else {
            continue;
        };

        let overlapped: Vec<GridPoint> = {
            let selector = RegionSelector::new(SceneMapper::new(&grid, CELL_SIZE));
            selector
                .overlapped_cells(from, to)
                .iter()
                .map(|cell| cell.grid_position())
                .collect()
        };

        let diff = stage.restage(overlapped);
        for position in &diff.entered {
            grid.cell_at_mut(*position)?.contents.lit = true;
        }
        for position in &diff.exited {
            grid.cell_at_mut(*position)?.contents.lit = false;
        }

        log::info!(
            "drag to {}: {} staged, {} entered, {} exited",
            to,
            stage.staged().len(),
            diff.entered.len(),
            diff.exited.len()
        );
    }

    println!("{}", panel::render(&grid));

    let probes = [
        ScenePoint::new(0.0, 0.0),
        ScenePoint::new(18.0, -7.0),
        ScenePoint::new(80.0, 80.0),
    ];
    for probe in probes {
        println!("mouse {} -> {}", probe, panel::readout(&grid, CELL_SIZE, probe));
    }

    let window = grid.subgrid(GridPoint::ZERO, GridSize::new(3, 3))?;
    let lit = window.iter().filter(|cell| cell.contents.lit).count();
    println!("{} of {} cells lit around the origin", lit, window.len());

    let mut rng = StdRng::seed_from_u64(1);
    let picked = grid.random_cell(&mut rng)?.grid_position();
    println!("random cell: {}", picked);

    tracker.release();
    let cleared = stage.clear();
    for position in &cleared.exited {
        grid.cell_at_mut(*position)?.contents.lit = false;
    }
    log::info!("selection cleared, {} cells released", cleared.exited.len());

    Ok(())
}
