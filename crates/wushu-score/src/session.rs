//! Frame-stream scoring with best-frame tracking.

use serde::{Deserialize, Serialize};
use tracing::debug;
use wushu_catalog::ReferenceCatalog;
use wushu_core::{Pose, PostureId};

use crate::analyze::{assess, Assessment};
use crate::config::ScoringConfig;
use crate::stability::temporal_stability;

/// Sampling options for a [`FrameSession`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionOpts {
    /// Every `stride`-th frame is analysed.
    pub stride: usize,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self { stride: 10 }
    }
}

impl SessionOpts {
    /// Returns a copy with a zero stride replaced by one.
    pub fn sanitised(&self) -> Self {
        Self {
            stride: self.stride.max(1),
        }
    }
}

/// Best-scoring sampled frame so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestFrame {
    /// One-based index of the frame in the stream.
    pub frame: usize,
    pub assessment: Assessment,
}

/// Counters and scores gathered over a stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub posture: PostureId,
    pub frames: usize,
    pub sampled: usize,
    pub undetected: usize,
    pub best_frame: Option<usize>,
    pub best_score: Option<f64>,
    pub latest_score: Option<f64>,
    pub temporal_stability: Option<f64>,
}

/// Scores a stream of frames for one posture.
///
/// Frames are numbered from one; frame `n` is analysed when `n` is a
/// multiple of the stride. `None` or an empty pose means no person was
/// detected. Error-level results never become the best frame.
#[derive(Debug, Clone)]
pub struct FrameSession<'a> {
    posture: PostureId,
    catalog: &'a ReferenceCatalog,
    config: &'a ScoringConfig,
    opts: SessionOpts,
    frames: usize,
    sampled: usize,
    undetected: usize,
    latest_score: Option<f64>,
    best: Option<BestFrame>,
    sampled_poses: Vec<Pose>,
}

impl<'a> FrameSession<'a> {
    /// Starts an empty session.
    pub fn new(
        posture: PostureId,
        catalog: &'a ReferenceCatalog,
        config: &'a ScoringConfig,
        opts: SessionOpts,
    ) -> Self {
        Self {
            posture,
            catalog,
            config,
            opts: opts.sanitised(),
            frames: 0,
            sampled: 0,
            undetected: 0,
            latest_score: None,
            best: None,
            sampled_poses: Vec::new(),
        }
    }

    /// Feeds the next frame; returns the assessment when it was sampled.
    pub fn push(&mut self, pose: Option<&Pose>) -> Option<Assessment> {
        self.frames += 1;
        if self.frames % self.opts.stride != 0 {
            return None;
        }
        self.sampled += 1;
        let empty = Pose::default();
        let pose = match pose {
            Some(pose) if !pose.is_empty() => pose,
            _ => {
                self.undetected += 1;
                &empty
            }
        };
        let assessment = assess(pose, self.posture, self.catalog, self.config);
        self.latest_score = Some(assessment.final_score);
        if !pose.is_empty() {
            self.sampled_poses.push(pose.clone());
        }
        if !assessment.is_error() {
            let improves = self
                .best
                .as_ref()
                .map_or(true, |best| assessment.final_score > best.assessment.final_score);
            if improves {
                debug!(
                    frame = self.frames,
                    score = assessment.final_score,
                    "new best frame"
                );
                self.best = Some(BestFrame {
                    frame: self.frames,
                    assessment: assessment.clone(),
                });
            }
        }
        Some(assessment)
    }

    /// Best frame so far.
    pub fn best(&self) -> Option<&BestFrame> {
        self.best.as_ref()
    }

    /// Steadiness across sampled poses; see [`temporal_stability`].
    pub fn temporal_stability(&self) -> Option<f64> {
        temporal_stability(&self.sampled_poses, self.config)
    }

    /// Snapshot of the session counters.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            posture: self.posture,
            frames: self.frames,
            sampled: self.sampled,
            undetected: self.undetected,
            best_frame: self.best.as_ref().map(|best| best.frame),
            best_score: self.best.as_ref().map(|best| best.assessment.final_score),
            latest_score: self.latest_score,
            temporal_stability: self.temporal_stability(),
        }
    }
}
