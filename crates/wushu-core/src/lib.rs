#![doc = "Core data model for the wushu pose scoring engine: keypoints, poses, posture identifiers, feedback records and the shared error type."]

pub mod errors;
pub mod feedback;
pub mod pose;
pub mod posture;
/// Canonical JSON and hashing helpers.
#[path = "serde.rs"]
pub mod serde_io;

use serde::{Deserialize, Serialize};

pub use errors::{ErrorInfo, WushuError};
pub use feedback::{FeedbackLevel, FeedbackRecord};
pub use pose::{BodyPart, JointLayout, JointName, Keypoint, Pose, BODY_JOINTS};
pub use posture::PostureId;
pub use serde_io::{from_json_slice, stable_hash_string, to_canonical_json_bytes};

/// Anatomical angle group targeted by ideal-angle maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointGroup {
    /// Left shoulder angle.
    LeftShoulder,
    /// Right shoulder angle.
    RightShoulder,
    /// Left elbow angle.
    LeftElbow,
    /// Right elbow angle.
    RightElbow,
    /// Left hip angle (shoulder, hip, knee chain).
    LeftHip,
    /// Right hip angle (shoulder, hip, knee chain).
    RightHip,
    /// Left pelvis angle (across the hip line).
    LeftPelvis,
    /// Right pelvis angle (across the hip line).
    RightPelvis,
    /// Left knee angle.
    LeftKnee,
    /// Right knee angle.
    RightKnee,
}

impl JointGroup {
    /// Term used in practitioner-facing feedback.
    pub fn term(self) -> &'static str {
        match self {
            JointGroup::LeftShoulder => "左肩",
            JointGroup::RightShoulder => "右肩",
            JointGroup::LeftElbow => "左肘",
            JointGroup::RightElbow => "右肘",
            JointGroup::LeftHip => "左髋",
            JointGroup::RightHip => "右髋",
            JointGroup::LeftPelvis => "左骨盆",
            JointGroup::RightPelvis => "右骨盆",
            JointGroup::LeftKnee => "左膝",
            JointGroup::RightKnee => "右膝",
        }
    }
}
