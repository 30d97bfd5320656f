use serde::{Deserialize, Serialize};
use wushu_core::errors::{ErrorInfo, WushuError};

fn config_error(code: &str, err: impl ToString) -> WushuError {
    WushuError::Config(ErrorInfo::new(code, err.to_string()))
}

/// Position sub-score constants.
///
/// The axis scale is tuned to the coordinate system of the keypoint
/// extractor; a different detector needs a re-derived value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionOpts {
    /// Expected coordinate range per axis.
    pub axis_scale: f64,
    /// Score returned when no joints can be compared.
    pub neutral: f64,
}

impl Default for PositionOpts {
    fn default() -> Self {
        Self {
            axis_scale: 500.0,
            neutral: 5.0,
        }
    }
}

/// Angle sub-score constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AngleOpts {
    /// Average deviation, in degrees, that costs one point.
    pub degrees_per_point: f64,
    /// Score returned when no ideal map exists or no group matched.
    pub neutral: f64,
}

impl Default for AngleOpts {
    fn default() -> Self {
        Self {
            degrees_per_point: 10.0,
            neutral: 7.0,
        }
    }
}

/// Stability sub-score constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StabilityOpts {
    /// Variance mapped to one point of penalty.
    pub variance_divisor: f64,
    /// Largest penalty applied.
    pub max_penalty: f64,
    /// Score returned for an empty pose.
    pub neutral: f64,
}

impl Default for StabilityOpts {
    fn default() -> Self {
        Self {
            variance_divisor: 1000.0,
            max_penalty: 5.0,
            neutral: 5.0,
        }
    }
}

/// Weights combining the sub-scores into the final score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    /// Position sub-score weight.
    pub position: f64,
    /// Angle sub-score weight.
    pub angle: f64,
    /// Stability sub-score weight.
    pub stability: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            position: 0.5,
            angle: 0.4,
            stability: 0.1,
        }
    }
}

impl Weights {
    fn total(&self) -> f64 {
        self.position + self.angle + self.stability
    }
}

/// Thresholds driving level assignment and suggestion generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackOpts {
    /// Minimum final score for the excellent level and the encouraging remark.
    pub excellent_at: f64,
    /// Minimum final score for the good level.
    pub good_at: f64,
    /// Sub-scores below this value trigger corrective suggestions.
    pub low_score_below: f64,
    /// Frame width used to normalise joint displacement.
    pub frame_width: f64,
    /// Frame height used to normalise joint displacement.
    pub frame_height: f64,
    /// Normalised displacement above which a joint is named.
    pub joint_distance_threshold: f64,
    /// Degrees of deviation above which a joint group is named.
    pub angle_deviation_threshold: f64,
}

impl Default for FeedbackOpts {
    fn default() -> Self {
        Self {
            excellent_at: 8.0,
            good_at: 6.0,
            low_score_below: 6.0,
            frame_width: 640.0,
            frame_height: 480.0,
            joint_distance_threshold: 0.1,
            angle_deviation_threshold: 20.0,
        }
    }
}

impl FeedbackOpts {
    /// Length of the frame diagonal.
    pub fn frame_diagonal(&self) -> f64 {
        self.frame_width.hypot(self.frame_height)
    }
}

/// Every empirical constant used by the scorers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Include the z axis in distance computations (applied to both poses).
    pub include_depth: bool,
    /// Final score returned when the input cannot be scored.
    pub precondition_default: f64,
    /// Position sub-score constants.
    pub position: PositionOpts,
    /// Angle sub-score constants.
    pub angles: AngleOpts,
    /// Stability sub-score constants.
    pub stability: StabilityOpts,
    /// Sub-score weights.
    pub weights: Weights,
    /// Feedback thresholds.
    pub feedback: FeedbackOpts,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            include_depth: false,
            precondition_default: 3.0,
            position: PositionOpts::default(),
            angles: AngleOpts::default(),
            stability: StabilityOpts::default(),
            weights: Weights::default(),
            feedback: FeedbackOpts::default(),
        }
    }
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

impl ScoringConfig {
    /// Parses a configuration from YAML; missing fields keep their defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self, WushuError> {
        let config: Self =
            serde_yaml::from_str(text).map_err(|err| config_error("config-yaml-read", err))?;
        Ok(config.sanitised())
    }

    /// Parses a configuration from JSON bytes; missing fields keep their defaults.
    pub fn from_json_slice(data: &[u8]) -> Result<Self, WushuError> {
        let config: Self =
            serde_json::from_slice(data).map_err(|err| config_error("config-json-read", err))?;
        Ok(config.sanitised())
    }

    /// Returns a copy with non-positive scales replaced by defaults and
    /// weights renormalised to sum to one.
    pub fn sanitised(&self) -> Self {
        let defaults = Self::default();
        let mut out = self.clone();
        out.position.axis_scale =
            positive_or(self.position.axis_scale, defaults.position.axis_scale);
        out.angles.degrees_per_point =
            positive_or(self.angles.degrees_per_point, defaults.angles.degrees_per_point);
        out.stability.variance_divisor = positive_or(
            self.stability.variance_divisor,
            defaults.stability.variance_divisor,
        );
        out.stability.max_penalty = self.stability.max_penalty.clamp(0.0, 10.0);
        out.feedback.frame_width =
            positive_or(self.feedback.frame_width, defaults.feedback.frame_width);
        out.feedback.frame_height =
            positive_or(self.feedback.frame_height, defaults.feedback.frame_height);

        let w = &self.weights;
        let valid = [w.position, w.angle, w.stability]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0);
        let total = w.total();
        out.weights = if !valid || total <= 0.0 {
            defaults.weights
        } else if (total - 1.0).abs() < 1e-9 {
            w.clone()
        } else {
            Weights {
                position: w.position / total,
                angle: w.angle / total,
                stability: w.stability / total,
            }
        };
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_overrides_only_named_fields() {
        let config = ScoringConfig::from_yaml_str("position:\n  axis_scale: 1.0\n").unwrap();
        assert_eq!(config.position.axis_scale, 1.0);
        assert_eq!(config.position.neutral, 5.0);
        assert_eq!(config.weights, Weights::default());
    }

    #[test]
    fn weights_are_renormalised() {
        let mut config = ScoringConfig::default();
        config.weights = Weights {
            position: 2.0,
            angle: 1.0,
            stability: 1.0,
        };
        let clean = config.sanitised();
        assert!((clean.weights.position - 0.5).abs() < 1e-12);
        assert!((clean.weights.angle - 0.25).abs() < 1e-12);
    }

    #[test]
    fn negative_scales_fall_back() {
        let mut config = ScoringConfig::default();
        config.position.axis_scale = -3.0;
        config.weights.angle = -1.0;
        let clean = config.sanitised();
        assert_eq!(clean.position.axis_scale, 500.0);
        assert_eq!(clean.weights, Weights::default());
    }

    #[test]
    fn malformed_yaml_is_a_config_error() {
        let err = ScoringConfig::from_yaml_str("position: [1, 2").unwrap_err();
        assert_eq!(err.code(), "config-yaml-read");
    }

    #[test]
    fn frame_diagonal_matches_vga() {
        assert!((FeedbackOpts::default().frame_diagonal() - 800.0).abs() < 1e-9);
    }
}
