use tracing::debug;
use wushu_core::{Keypoint, Pose};

use crate::config::ScoringConfig;

/// Distance between two joints, in the x,y plane unless depth is enabled.
pub fn joint_distance(a: Keypoint, b: Keypoint, include_depth: bool) -> f64 {
    if include_depth {
        a.sub(b).length()
    } else {
        a.planar_distance(b)
    }
}

/// Similarity of index-aligned joints against the reference, 0 to 10.
///
/// Each joint contributes `max(0, 1 - distance / axis_scale)`; the mean is
/// scaled to ten. Returns the neutral default when nothing can be compared.
pub fn score_position(practitioner: &Pose, reference: &Pose, config: &ScoringConfig) -> f64 {
    let scale = config.position.axis_scale;
    let compared = practitioner.len().min(reference.len());
    if compared == 0 {
        debug!(
            practitioner = practitioner.len(),
            reference = reference.len(),
            "no joints to compare, using neutral position score"
        );
        return config.position.neutral;
    }
    let total: f64 = practitioner
        .points()
        .iter()
        .zip(reference.points())
        .map(|(p, r)| {
            let distance = joint_distance(*p, *r, config.include_depth) / scale;
            (1.0 - distance).max(0.0)
        })
        .sum();
    (total / compared as f64 * 10.0).clamp(0.0, 10.0)
}

/// Per-joint displacement normalised by the feedback frame diagonal.
pub fn normalised_deviations(
    practitioner: &Pose,
    reference: &Pose,
    config: &ScoringConfig,
) -> Vec<f64> {
    let diagonal = config.feedback.frame_diagonal();
    practitioner
        .points()
        .iter()
        .zip(reference.points())
        .map(|(p, r)| joint_distance(*p, *r, config.include_depth) / diagonal)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_is_ignored_by_default() {
        let config = ScoringConfig::default();
        let a: Pose = vec![Keypoint::new(0.0, 0.0, 0.0)].into();
        let b: Pose = vec![Keypoint::new(0.0, 0.0, 400.0)].into();
        assert_eq!(score_position(&a, &b, &config), 10.0);

        let mut deep = config.clone();
        deep.include_depth = true;
        assert!((score_position(&a, &b, &deep) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn far_joints_saturate_at_zero() {
        let config = ScoringConfig::default();
        let a: Pose = vec![Keypoint::planar(0.0, 0.0)].into();
        let b: Pose = vec![Keypoint::planar(5000.0, 0.0)].into();
        assert_eq!(score_position(&a, &b, &config), 0.0);
    }

    #[test]
    fn only_the_shorter_prefix_is_compared() {
        let config = ScoringConfig::default();
        let a: Pose = vec![Keypoint::planar(0.0, 0.0), Keypoint::planar(900.0, 0.0)].into();
        let b: Pose = vec![Keypoint::planar(0.0, 0.0)].into();
        assert_eq!(score_position(&a, &b, &config), 10.0);
    }
}
