use tracing::debug;
use wushu_catalog::{IdealAngleMap, ReferenceCatalog};
use wushu_core::{JointGroup, PostureId};

use crate::angles::AngleResult;
use crate::config::ScoringConfig;

/// Signed deviation of one measured angle from its ideal target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupDeviation {
    /// Joint group of the angle.
    pub group: JointGroup,
    /// Measured minus ideal, in degrees.
    pub delta: f64,
}

/// Deviations for every group present in both the measurements and the map.
pub fn group_deviations(angles: &[AngleResult], ideal: &IdealAngleMap) -> Vec<GroupDeviation> {
    angles
        .iter()
        .filter_map(|angle| {
            ideal.get(angle.group).map(|target| GroupDeviation {
                group: angle.group,
                delta: angle.degrees - target,
            })
        })
        .collect()
}

/// Similarity of measured angles against the posture's ideal map, 0 to 10.
pub fn score_angles(
    angles: &[AngleResult],
    posture: PostureId,
    catalog: &ReferenceCatalog,
    config: &ScoringConfig,
) -> f64 {
    let Some(ideal) = catalog.ideal_angles(posture) else {
        debug!(posture = posture.code(), "no ideal angle map, using neutral angle score");
        return config.angles.neutral;
    };
    let deviations = group_deviations(angles, ideal);
    if deviations.is_empty() {
        debug!(
            posture = posture.code(),
            measured = angles.len(),
            "no angle group matched the ideal map"
        );
        return config.angles.neutral;
    }
    let average =
        deviations.iter().map(|d| d.delta.abs()).sum::<f64>() / deviations.len() as f64;
    (10.0 - average / config.angles.degrees_per_point).clamp(0.0, 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(group: JointGroup, degrees: f64) -> AngleResult {
        AngleResult {
            group,
            label: String::new(),
            degrees,
        }
    }

    #[test]
    fn average_deviation_costs_a_point_per_ten_degrees() {
        let catalog = ReferenceCatalog::builtin();
        let config = ScoringConfig::default();
        let ideal = catalog.ideal_angles(PostureId::BingBuBengQuan).unwrap();
        let angles = vec![
            result(JointGroup::LeftShoulder, ideal.get(JointGroup::LeftShoulder).unwrap() + 30.0),
            result(JointGroup::RightShoulder, ideal.get(JointGroup::RightShoulder).unwrap() - 10.0),
        ];
        let score = score_angles(&angles, PostureId::BingBuBengQuan, &catalog, &config);
        assert!((score - 8.0).abs() < 1e-9);
    }

    #[test]
    fn unmatched_groups_are_neutral() {
        let catalog = ReferenceCatalog::builtin();
        let config = ScoringConfig::default();
        let angles = vec![result(JointGroup::LeftPelvis, 10.0)];
        let score = score_angles(&angles, PostureId::GongBuChongQuan, &catalog, &config);
        assert_eq!(score, 7.0);
    }

    #[test]
    fn missing_map_is_neutral() {
        let catalog = ReferenceCatalog::builtin();
        let config = ScoringConfig::default();
        let angles = vec![result(JointGroup::LeftElbow, 90.0)];
        let score = score_angles(&angles, PostureId::ShiZiZhangZui, &catalog, &config);
        assert_eq!(score, 7.0);
    }
}
