// editor.rs — one editor instance: owns the skeleton, topology, drag state and last angle set.
use serde::Serialize;
use crate::angles::AngleSet;
use crate::config::EditorConfig;
use crate::drag::{pick_landmark, DragController, DragState};
use crate::error::{EditorError, Result};
use crate::landmark::{Landmark, Point};
use crate::mover;
use crate::scene::Scene;
use crate::skeleton::{self, Skeleton, Topology};
use crate::svg;

pub struct PoseEditor {
    topology:  Topology,
    rest_pose: Skeleton,
    skeleton:  Skeleton,
    drag:      DragController,
    angles:    Option<AngleSet>,
}

#[derive(Serialize)]
struct Export<'a> {
    landmarks: &'a Skeleton,
    angles:    Option<&'a AngleSet>,
}

impl PoseEditor {
    pub fn new() -> Result<Self> {
        let (skeleton, topology) = skeleton::initialize()?;
        tracing::info!(connections = topology.connections().len(), "pose editor ready");
        Ok(Self::with_pose(skeleton, topology))
    }

    pub fn with_pose(skeleton: Skeleton, topology: Topology) -> Self {
        Self {
            topology,
            rest_pose: skeleton.clone(),
            skeleton,
            drag: DragController::default(),
            angles: None,
        }
    }

    pub fn skeleton(&self) -> &Skeleton { &self.skeleton }
    pub fn topology(&self) -> &Topology { &self.topology }
    pub fn drag_state(&self) -> DragState { self.drag.state() }
    pub fn active(&self) -> Option<Landmark> { self.drag.active() }

    /// Result of the last [`Self::compute_angles`], if any. Not refreshed by drags.
    pub fn angles(&self) -> Option<&AngleSet> { self.angles.as_ref() }

    pub fn move_joint(&mut self, joint: Landmark, requested: Point) {
        self.skeleton = mover::move_joint(&self.skeleton, &self.topology, joint, requested);
    }

    pub fn move_joint_named(&mut self, name: &str, requested: Point) -> Result<()> {
        self.skeleton = mover::move_joint_named(&self.skeleton, &self.topology, name, requested)?;
        Ok(())
    }

    /// Pointer-down at a diagram-space point; picks the nearest landmark within `hit_radius`.
    pub fn pointer_down_at(&mut self, local: Point, hit_radius: f32) -> Option<Landmark> {
        let target = pick_landmark(&self.skeleton, local, hit_radius);
        self.drag.pointer_down(target);
        target
    }

    pub fn pointer_down(&mut self, target: Option<Landmark>) { self.drag.pointer_down(target); }

    /// Commits the move immediately. Returns `false` while idle.
    pub fn pointer_move(&mut self, screen: Point, screen_to_local: impl Fn(Point) -> Point) -> bool {
        match self.drag.pointer_move(&self.skeleton, &self.topology, screen, screen_to_local) {
            Some(next) => { self.skeleton = next; true }
            None => false,
        }
    }

    pub fn pointer_up(&mut self) { self.drag.pointer_up(); }
    pub fn pointer_leave(&mut self) { self.drag.pointer_leave(); }

    pub fn compute_angles(&mut self) -> &AngleSet {
        let set = AngleSet::compute(&self.skeleton);
        tracing::info!(angles = ?set, "angles submitted");
        self.angles.insert(set)
    }

    pub fn reset(&mut self) {
        self.skeleton = self.rest_pose.clone();
        self.drag.pointer_up();
        self.angles = None;
        tracing::info!("pose reset");
    }

    pub fn scene(&self, cfg: &EditorConfig) -> Scene {
        Scene::build(&self.skeleton, &self.topology, cfg, self.drag.active())
    }

    pub fn export_json(&self) -> Result<String> {
        let export = Export { landmarks: &self.skeleton, angles: self.angles.as_ref() };
        serde_json::to_string_pretty(&export).map_err(EditorError::Encode)
    }

    pub fn export_svg(&self, cfg: &EditorConfig) -> String {
        // Exports never show a drag highlight.
        svg::to_svg(&Scene::build(&self.skeleton, &self.topology, cfg, None), cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angles::JointAngle;

    #[test]
    fn drag_then_submit() {
        let mut ed = PoseEditor::new().unwrap();
        assert_eq!(ed.pointer_down_at(Point::new(146.0, 271.0), 12.0), Some(Landmark::LeftWrist));
        assert!(ed.pointer_move(Point::new(150.0, 280.0), |p| p));
        ed.pointer_up();
        assert_eq!(ed.drag_state(), DragState::Idle);
        assert!(!ed.pointer_move(Point::new(0.0, 0.0), |p| p));
        assert_eq!(ed.skeleton().get(Landmark::LeftWrist), Point::new(150.0, 280.0));

        assert!(ed.angles().is_none());
        let elbow = ed.compute_angles().get(JointAngle::LeftElbow);
        assert_eq!(ed.angles().map(|a| a.get(JointAngle::LeftElbow)), Some(elbow));
    }

    #[test]
    fn angles_are_a_snapshot() {
        let mut ed = PoseEditor::new().unwrap();
        let before = ed.compute_angles().clone();
        ed.move_joint(Landmark::LeftWrist, Point::new(220.0, 200.0));
        assert_eq!(ed.angles(), Some(&before));
        assert_ne!(ed.compute_angles(), &before);
    }

    #[test]
    fn reset_restores_rest_pose() {
        let mut ed = PoseEditor::new().unwrap();
        let rest = ed.skeleton().clone();
        ed.pointer_down(Some(Landmark::RightHip));
        ed.pointer_move(Point::new(0.0, 0.0), |p| p);
        ed.compute_angles();
        ed.reset();
        assert_eq!(ed.skeleton(), &rest);
        assert_eq!(ed.drag_state(), DragState::Idle);
        assert!(ed.angles().is_none());
    }

    #[test]
    fn unknown_name_leaves_pose_untouched() {
        let mut ed = PoseEditor::new().unwrap();
        let before = ed.skeleton().clone();
        assert!(matches!(ed.move_joint_named("elbow", Point::ZERO), Err(EditorError::UnknownLandmark(_))));
        assert_eq!(ed.skeleton(), &before);
    }

    #[test]
    fn export_json_contains_landmarks_and_angles() {
        let mut ed = PoseEditor::new().unwrap();
        let json: serde_json::Value = serde_json::from_str(&ed.export_json().unwrap()).unwrap();
        assert!(json["angles"].is_null());
        assert_eq!(json["landmarks"]["nose"]["y"], 60.0);

        ed.compute_angles();
        let json: serde_json::Value = serde_json::from_str(&ed.export_json().unwrap()).unwrap();
        assert!(json["angles"]["right_knee"].is_number());
    }

    #[test]
    fn scene_highlights_active_joint_but_export_does_not() {
        let mut ed = PoseEditor::new().unwrap();
        let cfg = EditorConfig::default();
        ed.pointer_down(Some(Landmark::Nose));
        assert!(ed.scene(&cfg).markers.iter().any(|m| m.active));
        assert!(!ed.export_svg(&cfg).contains(r#"r="6.25""#));
    }
}
