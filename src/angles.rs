// angles.rs — interior joint angles, computed on demand from a skeleton snapshot.
use serde::{Serialize, Serializer, ser::SerializeMap};
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};
use crate::landmark::{Landmark, Point};
use crate::skeleton::Skeleton;

/// Angle at vertex `b` between `b→a` and `b→c`, in degrees (0..=180).
/// A zero-length arm yields 0 rather than NaN.
pub fn compute_angle(a: Point, b: Point, c: Point) -> f32 {
    let (ba, bc) = (a - b, c - b);
    let denom = ba.length() * bc.length();
    if denom == 0.0 { return 0.0; }
    (ba.dot(bc) / denom).clamp(-1.0, 1.0).acos().to_degrees()
}

pub fn round2(v: f32) -> f32 { (v * 100.0).round() / 100.0 }

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumCount, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum JointAngle {
    LeftElbow, RightElbow,
    LeftKnee, RightKnee,
    LeftShoulder, RightShoulder,
    LeftHip, RightHip,
}

impl JointAngle {
    /// (outer, vertex, outer)
    pub fn triplet(self) -> (Landmark, Landmark, Landmark) {
        use Landmark::*;
        match self {
            Self::LeftElbow     => (LeftShoulder, LeftElbow, LeftWrist),
            Self::RightElbow    => (RightShoulder, RightElbow, RightWrist),
            Self::LeftKnee      => (LeftHip, LeftKnee, LeftAnkle),
            Self::RightKnee     => (RightHip, RightKnee, RightAnkle),
            Self::LeftShoulder  => (Nose, LeftShoulder, LeftElbow),
            Self::RightShoulder => (Nose, RightShoulder, RightElbow),
            Self::LeftHip       => (LeftShoulder, LeftHip, LeftKnee),
            Self::RightHip      => (RightShoulder, RightHip, RightKnee),
        }
    }

    pub fn vertex(self) -> Landmark { self.triplet().1 }

    pub fn measure(self, skeleton: &Skeleton) -> f32 {
        let (a, b, c) = self.triplet();
        compute_angle(skeleton.get(a), skeleton.get(b), skeleton.get(c))
    }
}

/// The eight named angles, each rounded to two decimals.
#[derive(Clone, Debug, PartialEq)]
pub struct AngleSet {
    values: [f32; JointAngle::COUNT],
}

impl AngleSet {
    pub fn compute(skeleton: &Skeleton) -> Self {
        let mut values = [0.0; JointAngle::COUNT];
        for (slot, angle) in values.iter_mut().zip(JointAngle::iter()) {
            *slot = round2(angle.measure(skeleton));
        }
        Self { values }
    }

    pub fn get(&self, angle: JointAngle) -> f32 { self.values[angle as usize] }

    pub fn iter(&self) -> impl Iterator<Item = (JointAngle, f32)> + '_ {
        JointAngle::iter().zip(self.values.iter().copied())
    }
}

impl Serialize for AngleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(JointAngle::COUNT))?;
        for (angle, deg) in self.iter() {
            let key: &'static str = angle.into();
            map.serialize_entry(key, &deg)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton::initialize;

    #[test]
    fn right_angle() {
        let deg = compute_angle(Point::new(1.0, 0.0), Point::ZERO, Point::new(0.0, 1.0));
        assert!((deg - 90.0).abs() < 1e-4);
    }

    #[test]
    fn straight_line_is_180() {
        let deg = compute_angle(Point::new(0.0, -10.0), Point::ZERO, Point::new(0.0, 25.0));
        assert!((deg - 180.0).abs() < 1e-3);
    }

    #[test]
    fn symmetric_in_outer_points() {
        let (a, b, c) = (Point::new(3.0, 7.5), Point::new(-1.0, 2.0), Point::new(10.0, -4.0));
        assert_eq!(compute_angle(a, b, c), compute_angle(c, b, a));
    }

    #[test]
    fn degenerate_arm_is_zero_not_nan() {
        let (a, b) = (Point::new(5.0, 5.0), Point::new(1.0, 2.0));
        assert_eq!(compute_angle(b, b, a), 0.0);
        assert_eq!(compute_angle(a, b, b), 0.0);
        assert_eq!(compute_angle(b, b, b), 0.0);
    }

    #[test]
    fn rest_pose_elbows_are_nearly_straight() {
        let (sk, _) = initialize().unwrap();
        let set = AngleSet::compute(&sk);
        for angle in [JointAngle::LeftElbow, JointAngle::RightElbow] {
            let deg = set.get(angle);
            assert!(deg > 170.0 && deg <= 180.0, "{angle} = {deg}");
        }
        assert_eq!(set.get(JointAngle::LeftElbow), set.get(JointAngle::RightElbow));
    }

    #[test]
    fn values_are_rounded_to_two_decimals() {
        let (sk, _) = initialize().unwrap();
        for (_, deg) in AngleSet::compute(&sk).iter() {
            assert!(((deg * 100.0).round() - deg * 100.0).abs() < 1e-2);
        }
        assert_eq!(round2(12.3456), 12.35);
    }

    #[test]
    fn serialises_with_named_keys() {
        let (sk, _) = initialize().unwrap();
        let json = serde_json::to_value(AngleSet::compute(&sk)).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 8);
        for key in ["left_elbow", "right_elbow", "left_knee", "right_knee",
                    "left_shoulder", "right_shoulder", "left_hip", "right_hip"] {
            assert!(obj.contains_key(key), "missing {key}");
        }
    }
}
