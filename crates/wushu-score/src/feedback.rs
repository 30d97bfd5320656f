//! Threshold-driven suggestion text.

use std::collections::BTreeSet;

use wushu_catalog::ReferenceCatalog;
use wushu_core::{BodyPart, FeedbackLevel, FeedbackRecord, Pose, PostureId};

use crate::analyze::SubScores;
use crate::angle_score::group_deviations;
use crate::angles::AngleResult;
use crate::config::ScoringConfig;
use crate::position::normalised_deviations;

/// Remark emitted for excellent scores.
pub const ENCOURAGEMENT: &str = "整体表现优秀，继续保持！";
/// Suggestion emitted for low stability.
pub const BALANCE_SUGGESTION: &str = "姿势稳定性不足，请保持身体平衡，减少晃动";
/// Position suggestion when no single joint crossed the threshold.
pub const GENERAL_POSITION_SUGGESTION: &str = "整体姿势与标准姿势有差距，请参考标准姿势图片进行调整";
/// Angle suggestion when no single group crossed the threshold.
pub const GENERAL_ANGLE_SUGGESTION: &str = "关节角度与标准姿势有差距，请注意调整";

const LIST_SEPARATOR: &str = "、";

/// Everything the generator reads for one scoring call.
#[derive(Debug, Clone, Copy)]
pub struct FeedbackContext<'a> {
    pub posture: PostureId,
    pub practitioner: &'a Pose,
    pub reference: &'a Pose,
    pub angles: &'a [AngleResult],
    pub scores: &'a SubScores,
    pub final_score: f64,
}

/// Level band for a final score.
pub fn level_for(final_score: f64, config: &ScoringConfig) -> FeedbackLevel {
    if final_score >= config.feedback.excellent_at {
        FeedbackLevel::Excellent
    } else if final_score >= config.feedback.good_at {
        FeedbackLevel::Good
    } else {
        FeedbackLevel::NeedsImprovement
    }
}

/// Builds the feedback record for a scored pose.
///
/// Excellent scores get the encouraging remark only. Otherwise each low
/// sub-score adds its corrective suggestion, and the posture cue follows
/// when position or angle was low.
pub fn generate_feedback(
    ctx: &FeedbackContext<'_>,
    catalog: &ReferenceCatalog,
    config: &ScoringConfig,
) -> FeedbackRecord {
    let level = level_for(ctx.final_score, config);
    let mut record = FeedbackRecord::new(level);
    if level == FeedbackLevel::Excellent {
        record.push(ENCOURAGEMENT);
        return record;
    }

    let low = config.feedback.low_score_below;
    let position_low = ctx.scores.position < low;
    let angle_low = ctx.scores.angle < low;

    if position_low {
        record.push(position_suggestion(ctx, config));
    }
    if angle_low {
        record.push(angle_suggestion(ctx, catalog, config));
    }
    if ctx.scores.stability < low {
        record.push(BALANCE_SUGGESTION);
    }
    if position_low || angle_low {
        if let Some(cue) = catalog.cue(ctx.posture) {
            record.push(cue);
        }
    }
    record
}

fn position_suggestion(ctx: &FeedbackContext<'_>, config: &ScoringConfig) -> String {
    let layout = ctx.practitioner.layout();
    let parts: BTreeSet<BodyPart> =
        normalised_deviations(ctx.practitioner, ctx.reference, config)
            .into_iter()
            .enumerate()
            .filter(|(_, deviation)| *deviation > config.feedback.joint_distance_threshold)
            .filter_map(|(index, _)| layout.joint_name(index))
            .map(|joint| joint.part())
            .collect();
    if parts.is_empty() {
        return GENERAL_POSITION_SUGGESTION.to_string();
    }
    let names: Vec<&str> = parts.into_iter().map(BodyPart::term).collect();
    format!(
        "您的{}位置需要调整，与标准姿势有较大偏差",
        names.join(LIST_SEPARATOR)
    )
}

fn angle_suggestion(
    ctx: &FeedbackContext<'_>,
    catalog: &ReferenceCatalog,
    config: &ScoringConfig,
) -> String {
    let threshold = config.feedback.angle_deviation_threshold;
    let problems: Vec<String> = catalog
        .ideal_angles(ctx.posture)
        .map(|ideal| group_deviations(ctx.angles, ideal))
        .unwrap_or_default()
        .into_iter()
        .filter(|d| d.delta.abs() > threshold)
        .map(|d| {
            let direction = if d.delta > 0.0 { "过大" } else { "过小" };
            format!("{}角度{}", d.group.term(), direction)
        })
        .collect();
    if problems.is_empty() {
        return GENERAL_ANGLE_SUGGESTION.to_string();
    }
    format!("关节角度问题: {}", problems.join(LIST_SEPARATOR))
}
