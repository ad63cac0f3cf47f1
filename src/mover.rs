// mover.rs — constrained joint moves with rigid propagation to descendants.
use std::str::FromStr;
use crate::error::{EditorError, Result};
use crate::landmark::{Landmark, Point};
use crate::skeleton::{Skeleton, Topology};

/// Relative slack for points that a previous clamp left a few ulps past the boundary.
const REACH_TOLERANCE: f32 = f32::EPSILON * 4.0;

/// Pulls `requested` back onto the parent-centred circle of radius `max_dist` if it lies outside.
pub fn clamp_to_reach(parent: Point, requested: Point, max_dist: f32) -> Point {
    let v = requested - parent;
    let dist = v.length();
    if dist == 0.0 || dist <= max_dist * (1.0 + REACH_TOLERANCE) { return requested; }
    parent + v * (max_dist / dist)
}

/// Where `joint` actually lands when asked to go to `requested`.
pub fn accepted_position(skeleton: &Skeleton, topology: &Topology, joint: Landmark, requested: Point) -> Point {
    let Some(parent) = topology.parent(joint) else { return requested };
    let Some(max_dist) = topology.max_reach(joint) else { return requested };
    let accepted = clamp_to_reach(skeleton.get(parent), requested, max_dist);
    if accepted != requested {
        tracing::debug!(joint = joint.name(), parent = parent.name(), max_dist, "clamped to reach");
    }
    accepted
}

/// Moves `joint` towards `requested`, clamped to its max reach from the parent,
/// then translates its whole subtree by the same delta.
pub fn move_joint(skeleton: &Skeleton, topology: &Topology, joint: Landmark, requested: Point) -> Skeleton {
    if requested == skeleton.get(joint) { return skeleton.clone(); }
    let accepted = accepted_position(skeleton, topology, joint, requested);
    let delta = accepted - skeleton.get(joint);

    let mut next = skeleton.clone();
    next.set(joint, accepted);
    for l in topology.descendants(joint) {
        next.set(l, skeleton.get(l) + delta);
    }
    tracing::trace!(joint = joint.name(), dx = delta.x, dy = delta.y, "joint moved");
    next
}

/// Name-based entry point. Unknown names are rejected and nothing moves.
pub fn move_joint_named(skeleton: &Skeleton, topology: &Topology, name: &str, requested: Point) -> Result<Skeleton> {
    let joint = Landmark::from_str(name).map_err(|_| EditorError::UnknownLandmark(name.to_string()))?;
    Ok(move_joint(skeleton, topology, joint, requested))
}
