//! Single-frame dispersion and multi-frame steadiness.

use tracing::debug;
use wushu_core::Pose;

use crate::config::ScoringConfig;
use crate::position::joint_distance;

/// Displacement per point of penalty in [`temporal_stability`].
pub const TEMPORAL_DISPLACEMENT_SCALE: f64 = 50.0;

/// Scores the spread of joints around their centroid in one frame.
///
/// The population variance of joint-to-centroid distances (x,y plane)
/// costs one point per `variance_divisor`, capped at `max_penalty`. This
/// measures spatial dispersion, not steadiness over time; see
/// [`temporal_stability`] for the latter.
pub fn score_stability(pose: &Pose, config: &ScoringConfig) -> f64 {
    let Some(centroid) = pose.centroid() else {
        debug!("empty pose, using neutral stability score");
        return config.stability.neutral;
    };
    let distances: Vec<f64> = pose
        .points()
        .iter()
        .map(|p| p.planar_distance(centroid))
        .collect();
    let n = distances.len() as f64;
    let mean = distances.iter().sum::<f64>() / n;
    let variance = distances.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / n;
    let penalty = (variance / config.stability.variance_divisor).min(config.stability.max_penalty);
    (10.0 - penalty).clamp(0.0, 10.0)
}

/// Scores how little the joints move between consecutive frames.
///
/// Each consecutive pair contributes the mean displacement of its aligned
/// joints; the overall mean costs one point per [`TEMPORAL_DISPLACEMENT_SCALE`].
/// Returns `None` with fewer than two non-empty frames.
pub fn temporal_stability(frames: &[Pose], config: &ScoringConfig) -> Option<f64> {
    let mut total = 0.0;
    let mut pairs = 0usize;
    for window in frames.windows(2) {
        let (prev, next) = (&window[0], &window[1]);
        let compared = prev.len().min(next.len());
        if compared == 0 {
            continue;
        }
        let sum: f64 = prev
            .points()
            .iter()
            .zip(next.points())
            .map(|(a, b)| joint_distance(*a, *b, config.include_depth))
            .sum();
        total += sum / compared as f64;
        pairs += 1;
    }
    if pairs == 0 {
        return None;
    }
    let mean = total / pairs as f64;
    Some((10.0 - (mean / TEMPORAL_DISPLACEMENT_SCALE).min(10.0)).clamp(0.0, 10.0))
}
