use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tracing::info;
use wushu_score::{Assessment, FrameSession, SessionOpts, SessionSummary};

use super::{load_catalog, load_config, load_frames, parse_posture, print_json};

#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Posture identifier (Chinese name, pinyin or snake_case code).
    #[arg(long)]
    pub posture: String,
    /// JSON array of frames; each entry is a pose or `null`.
    #[arg(long)]
    pub frames: PathBuf,
    /// Analyse every n-th frame.
    #[arg(long, default_value_t = 10)]
    pub stride: usize,
    /// Scoring configuration (YAML or JSON).
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Reference catalog replacing the built-in one (YAML or JSON).
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct SessionOutput {
    pub summary: SessionSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best: Option<Assessment>,
}

pub fn build(args: &SessionArgs) -> Result<SessionOutput, Box<dyn Error>> {
    let posture = parse_posture(&args.posture)?;
    let frames = load_frames(&args.frames)?;
    let config = load_config(args.config.as_deref())?;
    let catalog = load_catalog(args.catalog.as_deref())?;
    let mut session = FrameSession::new(
        posture,
        &catalog,
        &config,
        SessionOpts {
            stride: args.stride,
        },
    );
    for frame in &frames {
        session.push(frame.as_ref());
    }
    let summary = session.summary();
    info!(
        frames = summary.frames,
        sampled = summary.sampled,
        best_frame = summary.best_frame,
        "session finished"
    );
    Ok(SessionOutput {
        best: session.best().map(|best| best.assessment.clone()),
        summary,
    })
}

pub fn run(args: &SessionArgs) -> Result<(), Box<dyn Error>> {
    print_json(&build(args)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;

    #[test]
    fn picks_best_frame_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let master = fixtures::master();
        let drifted: wushu_core::Pose = master
            .points()
            .iter()
            .map(|p| p.offset(60.0, 0.0, 0.0))
            .collect();
        let frames = vec![Some(drifted.clone()), None, Some(master), Some(drifted)];
        let path = fixtures::write(&dir, "frames.json", &serde_json::to_string(&frames).unwrap());
        let args = SessionArgs {
            posture: "弓步冲拳".into(),
            frames: path,
            stride: 1,
            config: None,
            catalog: None,
        };
        let output = build(&args).unwrap();
        assert_eq!(output.summary.sampled, 4);
        assert_eq!(output.summary.undetected, 1);
        assert_eq!(output.summary.best_frame, Some(3));
        assert!(output.best.is_some());
    }
}
