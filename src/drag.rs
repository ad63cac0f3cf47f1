// drag.rs — pointer input → sequence of constrained joint moves.
use crate::landmark::{Landmark, Point};
use crate::mover::move_joint;
use crate::skeleton::{Skeleton, Topology};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Landmark),
}

#[derive(Clone, Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn state(&self) -> DragState { self.state }

    pub fn active(&self) -> Option<Landmark> {
        match self.state {
            DragState::Dragging(l) => Some(l),
            DragState::Idle => None,
        }
    }

    /// Pointer-down on `target`; `None` (empty space) leaves the controller idle.
    pub fn pointer_down(&mut self, target: Option<Landmark>) {
        if let Some(l) = target {
            tracing::debug!(joint = l.name(), "drag started");
            self.state = DragState::Dragging(l);
        }
    }

    /// While dragging, maps `screen` into diagram space and returns the moved skeleton.
    /// Idle moves return `None`; the caller keeps its skeleton.
    pub fn pointer_move(
        &self,
        skeleton: &Skeleton,
        topology: &Topology,
        screen: Point,
        screen_to_local: impl Fn(Point) -> Point,
    ) -> Option<Skeleton> {
        let DragState::Dragging(joint) = self.state else { return None };
        Some(move_joint(skeleton, topology, joint, screen_to_local(screen)))
    }

    pub fn pointer_up(&mut self) { self.release("pointer up"); }

    pub fn pointer_leave(&mut self) { self.release("pointer left canvas"); }

    fn release(&mut self, why: &str) {
        if let DragState::Dragging(l) = self.state {
            tracing::debug!(joint = l.name(), why, "drag stopped");
        }
        self.state = DragState::Idle;
    }
}

/// Nearest landmark within `radius` of `p` (diagram units).
pub fn pick_landmark(skeleton: &Skeleton, p: Point, radius: f32) -> Option<Landmark> {
    skeleton.iter()
        .map(|(l, pos)| (l, pos.distance_to(p)))
        .filter(|(_, d)| *d <= radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(l, _)| l)
}
