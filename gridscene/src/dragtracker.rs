use crate::scenepoint::ScenePoint;

#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// Tracks the two vertices of an in-flight rubber-band gesture. Dragging
/// can only be entered from Idle; a gesture that collapses back to zero
/// area drops the tracker to Idle again.
#[derive(Debug)]
pub struct DragTracker {
    phase: DragPhase,
    start: ScenePoint,
    end: ScenePoint,
}

impl DragTracker {
    pub fn new() -> Self {
        DragTracker {
            phase: DragPhase::Idle,
            start: ScenePoint::ZERO,
            end: ScenePoint::ZERO,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// The gesture's vertices, observable only while dragging.
    pub fn vertices(&self) -> Option<(ScenePoint, ScenePoint)> {
        match self.phase {
            DragPhase::Dragging => Some((self.start, self.end)),
            DragPhase::Idle => None,
        }
    }

    /// Feeds the latest pointer positions. The vertices always update;
    /// the phase only changes where the transition guard allows it.
    pub fn drag_to(&mut self, start: ScenePoint, end: ScenePoint) {
        self.start = start;
        self.end = end;

        if start == end {
            self.transition_to(DragPhase::Idle);
        } else {
            self.transition_to(DragPhase::Dragging);
        }
    }

    pub fn release(&mut self) {
        self.transition_to(DragPhase::Idle);
    }

    // Re-entering Dragging is forbidden; Idle is reachable from anywhere.
    fn can_enter(&self, next: DragPhase) -> bool {
        match next {
            DragPhase::Dragging => self.phase == DragPhase::Idle,
            DragPhase::Idle => true,
        }
    }

    fn transition_to(&mut self, next: DragPhase) -> bool {
        if !self.can_enter(next) {
            return false;
        }

        if self.phase != next {
            log::debug!("drag phase: {:?} -> {:?}", self.phase, next);
        }

        self.phase = next;
        true
    }
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::dragtracker::*;

    #[test]
    fn starts_idle_with_hidden_vertices() {
        let tracker = DragTracker::new();
        assert_eq!(tracker.phase(), DragPhase::Idle);
        assert_eq!(tracker.vertices(), None);
    }

    #[test]
    fn drag_enters_dragging_from_idle() {
        let mut tracker = DragTracker::new();
        tracker.drag_to(ScenePoint::ZERO, ScenePoint::new(5.0, 5.0));

        assert_eq!(tracker.phase(), DragPhase::Dragging);
        assert_eq!(
            tracker.vertices(),
            Some((ScenePoint::ZERO, ScenePoint::new(5.0, 5.0)))
        );
    }

    #[test]
    fn vertices_keep_updating_while_dragging() {
        let mut tracker = DragTracker::new();
        tracker.drag_to(ScenePoint::ZERO, ScenePoint::new(5.0, 5.0));
        tracker.drag_to(ScenePoint::ZERO, ScenePoint::new(12.0, -3.0));

        assert_eq!(tracker.phase(), DragPhase::Dragging);
        assert_eq!(
            tracker.vertices(),
            Some((ScenePoint::ZERO, ScenePoint::new(12.0, -3.0)))
        );
    }

    #[test]
    fn zero_area_gesture_returns_to_idle() {
        let mut tracker = DragTracker::new();
        tracker.drag_to(ScenePoint::ZERO, ScenePoint::new(5.0, 5.0));
        tracker.drag_to(ScenePoint::new(5.0, 5.0), ScenePoint::new(5.0, 5.0));

        assert_eq!(tracker.phase(), DragPhase::Idle);
        assert_eq!(tracker.vertices(), None);
    }

    #[test]
    fn release_returns_to_idle() {
        let mut tracker = DragTracker::new();
        tracker.drag_to(ScenePoint::ZERO, ScenePoint::new(5.0, 5.0));
        tracker.release();

        assert_eq!(tracker.phase(), DragPhase::Idle);
    }

    #[test]
    fn dragging_can_begin_again_after_release() {
        let mut tracker = DragTracker::new();
        tracker.drag_to(ScenePoint::ZERO, ScenePoint::new(5.0, 5.0));
        tracker.release();
        tracker.drag_to(ScenePoint::ZERO, ScenePoint::new(-2.0, 4.0));

        assert_eq!(tracker.phase(), DragPhase::Dragging);
    }
}
