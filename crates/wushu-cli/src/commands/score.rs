use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use wushu_score::{analyze_pose_by_name, compare_angles, Assessment};

use super::{load_catalog, load_config, load_pose, print_json};

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Posture identifier (Chinese name, pinyin or snake_case code).
    #[arg(long)]
    pub posture: String,
    /// JSON file holding the practitioner's keypoints.
    #[arg(long)]
    pub pose: PathBuf,
    /// Scoring configuration (YAML or JSON).
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Reference catalog replacing the built-in one (YAML or JSON).
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct ScoreOutput {
    pub assessment: Assessment,
    pub display_score: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agreement: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coaching_tip: Option<String>,
    pub catalog_fingerprint: String,
}

pub fn build(args: &ScoreArgs) -> Result<ScoreOutput, Box<dyn Error>> {
    let pose = load_pose(&args.pose)?;
    let config = load_config(args.config.as_deref())?;
    let catalog = load_catalog(args.catalog.as_deref())?;
    let assessment = analyze_pose_by_name(&args.posture, &pose, &catalog, &config);
    let (agreement, coaching_tip) = match assessment.posture {
        Some(posture) if !assessment.is_error() => (
            Some(compare_angles(&pose, posture, &catalog).agreement),
            Some(catalog.coaching_tip(posture, assessment.final_score).to_string()),
        ),
        _ => (None, None),
    };
    Ok(ScoreOutput {
        display_score: assessment.display_score(),
        assessment,
        agreement,
        coaching_tip,
        catalog_fingerprint: catalog.fingerprint()?,
    })
}

pub fn run(args: &ScoreArgs) -> Result<(), Box<dyn Error>> {
    print_json(&build(args)?)
}
