// scene.rs — renderable description of the current skeleton, independent of any backend.
use crate::config::EditorConfig;
use crate::landmark::{Landmark, Point};
use crate::skeleton::{Skeleton, Topology};

#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub ends: (Landmark, Landmark),
    pub from: Point,
    pub to:   Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub landmark: Landmark,
    pub center:   Point,
    pub radius:   f32,
    pub active:   bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text:   String,
    pub anchor: Point,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub segments: Vec<Segment>,
    pub markers:  Vec<Marker>,
    pub labels:   Vec<Label>,
}

impl Scene {
    /// Segments first, then markers on top. The active marker is enlarged.
    pub fn build(skeleton: &Skeleton, topology: &Topology, cfg: &EditorConfig, active: Option<Landmark>) -> Self {
        let segments = topology.connections().iter().map(|&(a, b)| Segment {
            ends: (a, b),
            from: skeleton.get(a),
            to:   skeleton.get(b),
        }).collect();

        let markers = skeleton.iter().map(|(landmark, center)| {
            let active = active == Some(landmark);
            let radius = if active { cfg.marker_radius * cfg.active_marker_scale } else { cfg.marker_radius };
            Marker { landmark, center, radius, active }
        }).collect();

        let labels = if cfg.show_labels {
            skeleton.iter().map(|(l, p)| Label {
                text: l.name().to_string(),
                anchor: p + Point::new(cfg.marker_radius + 2.0, -cfg.marker_radius),
            }).collect()
        } else {
            Vec::new()
        };

        Self { segments, markers, labels }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton::initialize;

    #[test]
    fn one_segment_per_connection_and_one_marker_per_landmark() {
        let (sk, topo) = initialize().unwrap();
        let scene = Scene::build(&sk, &topo, &EditorConfig::default(), None);
        assert_eq!(scene.segments.len(), topo.connections().len());
        assert_eq!(scene.markers.len(), 33);
        assert!(scene.labels.is_empty());
        assert!(scene.markers.iter().all(|m| !m.active && m.radius == 5.0));
    }

    #[test]
    fn segments_follow_current_positions() {
        let (sk, topo) = initialize().unwrap();
        let scene = Scene::build(&sk, &topo, &EditorConfig::default(), None);
        let seg = scene.segments.iter()
            .find(|s| s.ends == (Landmark::LeftElbow, Landmark::LeftWrist))
            .unwrap();
        assert_eq!(seg.from, Point::new(150.0, 200.0));
        assert_eq!(seg.to, Point::new(145.0, 270.0));
    }

    #[test]
    fn active_marker_is_enlarged() {
        let (sk, topo) = initialize().unwrap();
        let scene = Scene::build(&sk, &topo, &EditorConfig::default(), Some(Landmark::RightKnee));
        let m = scene.markers.iter().find(|m| m.active).unwrap();
        assert_eq!(m.landmark, Landmark::RightKnee);
        assert_eq!(m.radius, 6.25);
    }

    #[test]
    fn labels_on_request() {
        let (sk, topo) = initialize().unwrap();
        let cfg = EditorConfig { show_labels: true, ..EditorConfig::default() };
        let scene = Scene::build(&sk, &topo, &cfg, None);
        assert_eq!(scene.labels.len(), 33);
        assert_eq!(scene.labels[0].text, "nose");
    }
}
