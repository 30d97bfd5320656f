use serde::{Deserialize, Serialize};
use wushu_core::errors::WushuError;
use wushu_core::{JointGroup, Keypoint, Pose, BODY_JOINTS};

/// Index triple over the body joints.
///
/// The measured angle is the turning angle along the path `a -> b -> c`:
/// the angle between `pose[b] - pose[a]` and `pose[c] - pose[b]`. It is
/// not the interior angle at `b`; the shipped reference angles use this
/// convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AngleSpec {
    /// First joint of the path.
    pub a: usize,
    /// Joint where the path turns.
    pub b: usize,
    /// Last joint of the path.
    pub c: usize,
    /// Group the angle is scored under.
    pub group: JointGroup,
}

impl AngleSpec {
    const fn new(a: usize, b: usize, c: usize, group: JointGroup) -> Self {
        Self { a, b, c, group }
    }

    /// Segment label, e.g. `0-2/2-4`.
    pub fn label(&self) -> String {
        format!("{}-{}/{}-{}", self.b, self.a, self.a, self.c)
    }

    fn max_index(&self) -> usize {
        self.a.max(self.b).max(self.c)
    }
}

/// Angles computed for every pose, in output order.
pub const ANGLE_SPECS: [AngleSpec; 10] = [
    AngleSpec::new(2, 0, 4, JointGroup::LeftShoulder),
    AngleSpec::new(3, 1, 5, JointGroup::RightShoulder),
    AngleSpec::new(0, 2, 6, JointGroup::LeftElbow),
    AngleSpec::new(1, 3, 7, JointGroup::RightElbow),
    AngleSpec::new(6, 0, 8, JointGroup::LeftHip),
    AngleSpec::new(7, 1, 9, JointGroup::RightHip),
    AngleSpec::new(6, 7, 8, JointGroup::LeftPelvis),
    AngleSpec::new(7, 6, 9, JointGroup::RightPelvis),
    AngleSpec::new(8, 6, 10, JointGroup::LeftKnee),
    AngleSpec::new(9, 7, 11, JointGroup::RightKnee),
];

/// One measured angle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleResult {
    /// Group the angle is scored under.
    pub group: JointGroup,
    /// Segment label of the originating [`AngleSpec`].
    pub label: String,
    /// Angle in degrees within `[0, 180]`.
    pub degrees: f64,
}

/// Angle in degrees between two vectors; zero when either has no length.
pub fn angle_between(v1: Keypoint, v2: Keypoint) -> f64 {
    let m1 = v1.length();
    let m2 = v2.length();
    if m1 == 0.0 || m2 == 0.0 {
        return 0.0;
    }
    let cos = (v1.dot(v2) / (m1 * m2)).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// Turning angle along `p1 -> p2 -> p3`.
pub fn turning_angle(p1: Keypoint, p2: Keypoint, p3: Keypoint) -> f64 {
    angle_between(p2.sub(p1), p3.sub(p2))
}

/// Computes the ten tracked angles of a pose.
///
/// A 13-joint pose is read as nose plus body joints; the nose is skipped.
pub fn calculate_angles(pose: &Pose) -> Result<Vec<AngleResult>, WushuError> {
    let body = pose.body();
    let required = ANGLE_SPECS
        .iter()
        .map(AngleSpec::max_index)
        .max()
        .unwrap_or(BODY_JOINTS - 1)
        + 1;
    if body.len() < required {
        return Err(WushuError::insufficient_keypoints(required, pose.len()));
    }
    Ok(ANGLE_SPECS
        .iter()
        .map(|spec| AngleResult {
            group: spec.group,
            label: spec.label(),
            degrees: turning_angle(body[spec.a], body[spec.b], body[spec.c]),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight_line() -> Pose {
        (0..12).map(|i| Keypoint::planar(i as f64, 0.0)).collect()
    }

    #[test]
    fn labels_name_both_segments() {
        assert_eq!(ANGLE_SPECS[0].label(), "0-2/2-4");
        assert_eq!(ANGLE_SPECS[9].label(), "7-9/9-11");
    }

    #[test]
    fn right_angle_turn() {
        let angle = turning_angle(
            Keypoint::planar(0.0, 0.0),
            Keypoint::planar(1.0, 0.0),
            Keypoint::planar(1.0, 1.0),
        );
        assert!((angle - 90.0).abs() < 1e-9);
    }

    #[test]
    fn coincident_points_give_zero() {
        let p = Keypoint::new(3.0, 4.0, 5.0);
        assert_eq!(turning_angle(p, p, Keypoint::ZERO), 0.0);
    }

    #[test]
    fn short_pose_is_rejected() {
        let pose: Pose = (0..11).map(|i| Keypoint::planar(i as f64, 1.0)).collect();
        let err = calculate_angles(&pose).unwrap_err();
        assert_eq!(err.code(), "insufficient-keypoints");
        assert_eq!(err.info().context.get("actual"), Some(&"11".to_string()));
    }

    #[test]
    fn nose_is_skipped() {
        let body = straight_line();
        let mut with_nose = vec![Keypoint::new(100.0, -50.0, 7.0)];
        with_nose.extend_from_slice(body.points());
        let a = calculate_angles(&body).unwrap();
        let b = calculate_angles(&Pose::new(with_nose)).unwrap();
        assert_eq!(a, b);
    }
}
