use std::collections::HashSet;

use cellgrid::GridPoint;

/// The set of grid positions currently staged for selection, diffed
/// against each new overlap so highlights update incrementally.
#[derive(Debug, Default)]
pub struct SelectionStage {
    staged: HashSet<GridPoint>,
}

/// What changed between two consecutive overlaps. Pure set differences;
/// enumeration order of the incoming cells never matters.
#[derive(PartialEq, Eq, Debug, Default)]
pub struct StageDiff {
    pub entered: HashSet<GridPoint>,
    pub exited: HashSet<GridPoint>,
}

impl SelectionStage {
    pub fn new() -> Self {
        SelectionStage { staged: HashSet::new() }
    }

    pub fn staged(&self) -> &HashSet<GridPoint> {
        &self.staged
    }

    pub fn is_staged(&self, position: GridPoint) -> bool {
        self.staged.contains(&position)
    }

    pub fn restage(&mut self, overlapped: impl IntoIterator<Item = GridPoint>) -> StageDiff {
        let next: HashSet<GridPoint> = overlapped.into_iter().collect();

        let diff = StageDiff {
            entered: next.difference(&self.staged).copied().collect(),
            exited: self.staged.difference(&next).copied().collect(),
        };

        log::debug!(
            "restaged {} cells ({} entered, {} exited)",
            next.len(),
            diff.entered.len(),
            diff.exited.len()
        );

        self.staged = next;
        diff
    }

    /// Empties the stage, reporting everything that was staged as exited.
    pub fn clear(&mut self) -> StageDiff {
        StageDiff {
            entered: HashSet::new(),
            exited: std::mem::take(&mut self.staged),
        }
    }
}
