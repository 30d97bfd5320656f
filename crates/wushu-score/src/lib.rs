#![doc = "Scoring engine for martial-arts postures: angle calculation, position, angle and stability sub-scores, weighted aggregation and feedback text. Every entry point is a pure function of its inputs and the injected catalog and configuration."]

pub mod analyze;
pub mod angle_score;
pub mod angles;
pub mod compare;
pub mod config;
pub mod feedback;
pub mod position;
pub mod session;
pub mod stability;

pub use analyze::{analyze_pose, analyze_pose_by_name, assess, Assessment, SubScores};
pub use angle_score::{group_deviations, score_angles, GroupDeviation};
pub use angles::{calculate_angles, AngleResult, AngleSpec, ANGLE_SPECS};
pub use compare::{angle_agreement, compare_angles, AngleComparison, ComparisonReport};
pub use config::{AngleOpts, FeedbackOpts, PositionOpts, ScoringConfig, StabilityOpts, Weights};
pub use feedback::{generate_feedback, level_for, FeedbackContext};
pub use position::score_position;
pub use session::{BestFrame, FrameSession, SessionOpts, SessionSummary};
pub use stability::{score_stability, temporal_stability};

pub use wushu_catalog::ReferenceCatalog;
pub use wushu_core::{FeedbackLevel, FeedbackRecord, Keypoint, Pose, PostureId, WushuError};
