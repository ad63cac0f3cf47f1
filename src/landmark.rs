// landmark.rs
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// The fixed anatomical vocabulary. Discriminants double as array indices.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
    Serialize, Deserialize, Display, EnumCount, EnumIter, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(usize)]
pub enum Landmark {
    Nose,
    LeftEyeInner,
    LeftEye,
    LeftEyeOuter,
    RightEyeInner,
    RightEye,
    RightEyeOuter,
    LeftEar,
    RightEar,
    MouthLeft,
    MouthRight,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftPinky,
    RightPinky,
    LeftIndex,
    RightIndex,
    LeftThumb,
    RightThumb,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
    LeftHeel,
    RightHeel,
    LeftFootIndex,
    RightFootIndex,
}

impl Landmark {
    #[inline]
    pub fn index(self) -> usize { self as usize }

    pub fn name(self) -> &'static str { self.into() }

    /// Short display label, e.g. "L Elbow".
    pub fn label(self) -> String {
        let name = self.name();
        let (side, rest) = if let Some(r) = name.strip_prefix("left_") { ("L ", r) }
            else if let Some(r) = name.strip_prefix("right_") { ("R ", r) }
            else { ("", name) };
        let words: Vec<String> = rest.split('_').map(|w| {
            let mut c = w.chars();
            c.next().map(|f| f.to_ascii_uppercase().to_string() + c.as_str()).unwrap_or_default()
        }).collect();
        format!("{side}{}", words.join(" "))
    }
}

/// A position in diagram coordinates (x right, y down).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }

    pub fn length(self) -> f32 { (self.x * self.x + self.y * self.y).sqrt() }

    pub fn distance_to(self, other: Point) -> f32 { (other - self).length() }

    pub fn dot(self, other: Point) -> f32 { self.x * other.x + self.y * other.y }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point { Point::new(self.x + rhs.x, self.y + rhs.y) }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point { Point::new(self.x - rhs.x, self.y - rhs.y) }
}

impl Mul<f32> for Point {
    type Output = Point;
    fn mul(self, rhs: f32) -> Point { Point::new(self.x * rhs, self.y * rhs) }
}

impl From<[f32; 2]> for Point {
    fn from([x, y]: [f32; 2]) -> Self { Self::new(x, y) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn vocabulary_has_33_landmarks() {
        assert_eq!(Landmark::COUNT, 33);
        assert_eq!(Landmark::iter().count(), 33);
    }

    #[test]
    fn indices_are_dense() {
        for (i, l) in Landmark::iter().enumerate() {
            assert_eq!(l.index(), i);
        }
    }

    #[test]
    fn names_round_trip_through_from_str() {
        assert_eq!(Landmark::LeftFootIndex.name(), "left_foot_index");
        assert_eq!(Landmark::from_str("mouth_right").ok(), Some(Landmark::MouthRight));
        assert!(Landmark::from_str("left_tail").is_err());
    }

    #[test]
    fn labels() {
        assert_eq!(Landmark::LeftElbow.label(), "L Elbow");
        assert_eq!(Landmark::RightFootIndex.label(), "R Foot Index");
        assert_eq!(Landmark::Nose.label(), "Nose");
    }

    #[test]
    fn point_math() {
        let a = Point::new(3.0, 4.0);
        assert_eq!(a.length(), 5.0);
        assert_eq!(a - Point::new(1.0, 1.0), Point::new(2.0, 3.0));
        assert_eq!(a * 2.0, Point::new(6.0, 8.0));
        assert_eq!(a.dot(Point::new(1.0, 0.0)), 3.0);
        assert_eq!(Point::ZERO.distance_to(a), 5.0);
    }
}
