use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use wushu_catalog::ReferenceCatalog;
use wushu_core::errors::WushuError;
use wushu_core::{FeedbackLevel, FeedbackRecord, Pose, PostureId, BODY_JOINTS};

use crate::angle_score::score_angles;
use crate::angles::{calculate_angles, AngleResult};
use crate::config::ScoringConfig;
use crate::feedback::{generate_feedback, FeedbackContext};
use crate::position::score_position;
use crate::stability::score_stability;

/// Message for a frame without a detected person.
pub const NO_PERSON_MESSAGE: &str = "未检测到人体姿势，请确保画面中有清晰的人物";
/// Message for a pose with NaN or infinite coordinates.
pub const INVALID_KEYPOINTS_MESSAGE: &str = "关键点坐标无效，请重新检测人体姿势";

/// The three component scores, each within `[0, 10]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub position: f64,
    pub angle: f64,
    pub stability: f64,
}

impl SubScores {
    /// Weighted sum clamped to `[0, 10]`.
    pub fn combine(&self, config: &ScoringConfig) -> f64 {
        let w = &config.weights;
        (w.position * self.position + w.angle * self.angle + w.stability * self.stability)
            .clamp(0.0, 10.0)
    }
}

/// Result of one scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Posture scored against, absent when the identifier did not parse.
    pub posture: Option<PostureId>,
    /// Final score within `[0, 10]`.
    pub final_score: f64,
    /// Component scores, absent for failed preconditions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<SubScores>,
    /// Level and suggestions.
    pub feedback: FeedbackRecord,
    /// Structured cause of an Error-level result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<WushuError>,
}

impl Assessment {
    fn failed(
        posture: Option<PostureId>,
        message: String,
        error: WushuError,
        config: &ScoringConfig,
    ) -> Self {
        warn!(
            posture = posture.map(PostureId::code),
            code = error.code(),
            "pose could not be scored"
        );
        Self {
            posture,
            final_score: config.precondition_default,
            scores: None,
            feedback: FeedbackRecord::error(message),
            error: Some(error),
        }
    }

    /// Final score at the one-decimal precision shown to practitioners.
    pub fn display_score(&self) -> String {
        format!("{:.1}", self.final_score)
    }

    /// Feedback level.
    pub fn level(&self) -> FeedbackLevel {
        self.feedback.level
    }

    /// Returns true when the input could not be scored.
    pub fn is_error(&self) -> bool {
        self.feedback.level == FeedbackLevel::Error
    }
}

/// Scores a pose against the catalog's reference for `posture`.
///
/// `angles` are the practitioner's measured angles. An empty pose, a pose
/// with non-finite coordinates or a posture without a master pose yields the
/// precondition default score and Error-level feedback instead of an error.
/// The configuration is sanitised before use.
pub fn analyze_pose(
    pose: &Pose,
    posture: PostureId,
    angles: &[AngleResult],
    catalog: &ReferenceCatalog,
    config: &ScoringConfig,
) -> Assessment {
    if pose.is_empty() {
        return Assessment::failed(
            Some(posture),
            NO_PERSON_MESSAGE.to_string(),
            WushuError::insufficient_keypoints(BODY_JOINTS, 0),
            config,
        );
    }
    if let Some(index) = pose.points().iter().position(|p| !p.is_finite()) {
        return Assessment::failed(
            Some(posture),
            INVALID_KEYPOINTS_MESSAGE.to_string(),
            WushuError::non_finite_keypoint(index),
            config,
        );
    }
    let config = &config.sanitised();
    let reference = match catalog.reference_pose(posture) {
        Ok(reference) => reference,
        Err(err) => {
            return Assessment::failed(
                Some(posture),
                format!("缺少{}的标准姿势数据", posture.name()),
                err,
                config,
            )
        }
    };

    let scores = SubScores {
        position: score_position(pose, reference, config),
        angle: score_angles(angles, posture, catalog, config),
        stability: score_stability(pose, config),
    };
    let final_score = scores.combine(config);
    debug!(
        posture = posture.code(),
        position = scores.position,
        angle = scores.angle,
        stability = scores.stability,
        final_score,
        "pose scored"
    );
    let feedback = generate_feedback(
        &FeedbackContext {
            posture,
            practitioner: pose,
            reference,
            angles,
            scores: &scores,
            final_score,
        },
        catalog,
        config,
    );
    Assessment {
        posture: Some(posture),
        final_score,
        scores: Some(scores),
        feedback,
        error: None,
    }
}

/// Measures the pose's angles and scores it in one call.
pub fn assess(
    pose: &Pose,
    posture: PostureId,
    catalog: &ReferenceCatalog,
    config: &ScoringConfig,
) -> Assessment {
    if pose.is_empty() {
        return analyze_pose(pose, posture, &[], catalog, config);
    }
    match calculate_angles(pose) {
        Ok(angles) => analyze_pose(pose, posture, &angles, catalog, config),
        Err(err) => Assessment::failed(
            Some(posture),
            format!("检测到的关键点不足，需要至少{BODY_JOINTS}个关节点"),
            err,
            config,
        ),
    }
}

/// Like [`assess`] with a free-form posture identifier.
pub fn analyze_pose_by_name(
    name: &str,
    pose: &Pose,
    catalog: &ReferenceCatalog,
    config: &ScoringConfig,
) -> Assessment {
    match name.parse::<PostureId>() {
        Ok(posture) => assess(pose, posture, catalog, config),
        Err(err) => Assessment::failed(None, format!("未知姿势类型: {name}"), err, config),
    }
}
