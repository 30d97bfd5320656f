//! Keypoints, poses and the anatomical names attached to joint indices.

use serde::{Deserialize, Serialize};

/// Number of body joints tracked by the canonical layout.
pub const BODY_JOINTS: usize = 12;

/// A single joint coordinate. `z` is zero for 2D-only sources.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "KeypointRepr", into = "KeypointRepr")]
pub struct Keypoint {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Depth coordinate.
    pub z: f64,
}

impl Keypoint {
    /// Origin keypoint.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a keypoint from three coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a keypoint for a 2D-only source.
    pub const fn planar(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Component-wise difference `self - other`.
    pub fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Component-wise translation by an offset.
    pub fn offset(self, dx: f64, dy: f64, dz: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Dot product treating both keypoints as vectors.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length treating the keypoint as a vector.
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Euclidean distance in the x,y plane.
    pub fn planar_distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Returns true when every coordinate is finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<(f64, f64, f64)> for Keypoint {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[f64; 3]> for Keypoint {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[f64; 2]> for Keypoint {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::planar(x, y)
    }
}

/// Wire form: `[x, y, z]` or `[x, y]`.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum KeypointRepr {
    Spatial([f64; 3]),
    Planar([f64; 2]),
}

impl From<KeypointRepr> for Keypoint {
    fn from(repr: KeypointRepr) -> Self {
        match repr {
            KeypointRepr::Spatial(coords) => coords.into(),
            KeypointRepr::Planar(coords) => coords.into(),
        }
    }
}

impl From<Keypoint> for KeypointRepr {
    fn from(point: Keypoint) -> Self {
        KeypointRepr::Spatial([point.x, point.y, point.z])
    }
}

/// Ordered joint sequence for one person at one instant.
///
/// Practitioner and reference poses are compared index by index, so the
/// order must follow one of the layouts described by [`JointLayout`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pose(Vec<Keypoint>);

impl Pose {
    /// Wraps an ordered list of keypoints.
    pub fn new(points: Vec<Keypoint>) -> Self {
        Self(points)
    }

    /// Number of joints in the pose.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the pose carries no joints (no person detected).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrowed view of the joints.
    pub fn points(&self) -> &[Keypoint] {
        &self.0
    }

    /// Joint at `index`, if present.
    pub fn get(&self, index: usize) -> Option<Keypoint> {
        self.0.get(index).copied()
    }

    /// Layout inferred from the joint count.
    pub fn layout(&self) -> JointLayout {
        JointLayout::for_len(self.len())
    }

    /// The twelve body joints, skipping a leading nose when present.
    pub fn body(&self) -> &[Keypoint] {
        let offset = self.layout().body_offset();
        self.0.get(offset..).unwrap_or(&[])
    }

    /// Mean of all joints, or `None` for an empty pose.
    pub fn centroid(&self) -> Option<Keypoint> {
        if self.0.is_empty() {
            return None;
        }
        let n = self.0.len() as f64;
        let sum = self
            .0
            .iter()
            .fold(Keypoint::ZERO, |acc, p| acc.offset(p.x, p.y, p.z));
        Some(Keypoint::new(sum.x / n, sum.y / n, sum.z / n))
    }

    /// Returns a copy with the joint at `index` moved by the given offset.
    pub fn with_offset(&self, index: usize, dx: f64, dy: f64, dz: f64) -> Self {
        let mut points = self.0.clone();
        if let Some(point) = points.get_mut(index) {
            *point = point.offset(dx, dy, dz);
        }
        Self(points)
    }
}

impl From<Vec<Keypoint>> for Pose {
    fn from(points: Vec<Keypoint>) -> Self {
        Self(points)
    }
}

impl<const N: usize> From<[(f64, f64, f64); N]> for Pose {
    fn from(points: [(f64, f64, f64); N]) -> Self {
        Self(points.into_iter().map(Keypoint::from).collect())
    }
}

impl FromIterator<Keypoint> for Pose {
    fn from_iter<I: IntoIterator<Item = Keypoint>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Landmark layouts emitted by the upstream keypoint extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointLayout {
    /// Shoulders, elbows, wrists, hips, knees, ankles (left before right).
    Body12,
    /// Nose followed by the twelve body joints.
    NoseBody13,
}

impl JointLayout {
    /// Chooses the layout from a joint count; only 13 joints imply a nose.
    pub fn for_len(len: usize) -> Self {
        if len == BODY_JOINTS + 1 {
            JointLayout::NoseBody13
        } else {
            JointLayout::Body12
        }
    }

    /// Index of the first body joint.
    pub fn body_offset(self) -> usize {
        match self {
            JointLayout::Body12 => 0,
            JointLayout::NoseBody13 => 1,
        }
    }

    /// Anatomical name of the joint at `index`, if the layout defines one.
    pub fn joint_name(self, index: usize) -> Option<JointName> {
        match self {
            JointLayout::NoseBody13 if index == 0 => Some(JointName::Nose),
            layout => index
                .checked_sub(layout.body_offset())
                .and_then(|body| JointName::BODY.get(body).copied()),
        }
    }
}

/// Anatomical landmark tracked by the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointName {
    Nose,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

impl JointName {
    /// Body joints in canonical index order.
    pub const BODY: [JointName; BODY_JOINTS] = [
        JointName::LeftShoulder,
        JointName::RightShoulder,
        JointName::LeftElbow,
        JointName::RightElbow,
        JointName::LeftWrist,
        JointName::RightWrist,
        JointName::LeftHip,
        JointName::RightHip,
        JointName::LeftKnee,
        JointName::RightKnee,
        JointName::LeftAnkle,
        JointName::RightAnkle,
    ];

    /// Side-agnostic body part.
    pub fn part(self) -> BodyPart {
        match self {
            JointName::Nose => BodyPart::Nose,
            JointName::LeftShoulder | JointName::RightShoulder => BodyPart::Shoulder,
            JointName::LeftElbow | JointName::RightElbow => BodyPart::Elbow,
            JointName::LeftWrist | JointName::RightWrist => BodyPart::Wrist,
            JointName::LeftHip | JointName::RightHip => BodyPart::Hip,
            JointName::LeftKnee | JointName::RightKnee => BodyPart::Knee,
            JointName::LeftAnkle | JointName::RightAnkle => BodyPart::Ankle,
        }
    }
}

/// Body part used when naming joints in feedback text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    Nose,
    Shoulder,
    Elbow,
    Wrist,
    Hip,
    Knee,
    Ankle,
}

impl BodyPart {
    /// Term used in practitioner-facing feedback.
    pub fn term(self) -> &'static str {
        match self {
            BodyPart::Nose => "鼻子",
            BodyPart::Shoulder => "肩膀",
            BodyPart::Elbow => "肘部",
            BodyPart::Wrist => "手腕",
            BodyPart::Hip => "髋部",
            BodyPart::Knee => "膝盖",
            BodyPart::Ankle => "脚踝",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirteen_joints_lead_with_nose() {
        let layout = JointLayout::for_len(13);
        assert_eq!(layout.joint_name(0), Some(JointName::Nose));
        assert_eq!(layout.joint_name(3), Some(JointName::LeftElbow));
        assert_eq!(layout.joint_name(13), None);
    }

    #[test]
    fn twelve_joints_start_at_shoulders() {
        let layout = JointLayout::for_len(12);
        assert_eq!(layout.joint_name(0), Some(JointName::LeftShoulder));
        assert_eq!(layout.joint_name(2), Some(JointName::LeftElbow));
        assert_eq!(layout.joint_name(11), Some(JointName::RightAnkle));
    }

    #[test]
    fn body_view_skips_nose() {
        let mut points = vec![Keypoint::new(9.0, 9.0, 9.0)];
        points.extend((0..12).map(|i| Keypoint::planar(i as f64, 0.0)));
        let pose = Pose::new(points);
        assert_eq!(pose.body().len(), 12);
        assert_eq!(pose.body()[0], Keypoint::planar(0.0, 0.0));
    }

    #[test]
    fn keypoints_accept_planar_json() {
        let pose: Pose = serde_json::from_str("[[1.0, 2.0], [3.0, 4.0, 5.0]]").unwrap();
        assert_eq!(pose.get(0), Some(Keypoint::new(1.0, 2.0, 0.0)));
        assert_eq!(pose.get(1), Some(Keypoint::new(3.0, 4.0, 5.0)));
    }

    #[test]
    fn centroid_of_empty_pose_is_none() {
        assert!(Pose::default().centroid().is_none());
    }
}
