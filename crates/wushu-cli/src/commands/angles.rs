use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use wushu_score::{calculate_angles, compare_angles, AngleResult, ComparisonReport};

use super::{load_catalog, load_pose, parse_posture, print_json};

#[derive(Args, Debug)]
pub struct AnglesArgs {
    /// JSON file holding the keypoints.
    #[arg(long)]
    pub pose: PathBuf,
    /// Compare against this posture's master angle profile.
    #[arg(long)]
    pub posture: Option<String>,
    /// Reference catalog replacing the built-in one (YAML or JSON).
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct AnglesOutput {
    pub angles: Vec<AngleResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonReport>,
}

pub fn build(args: &AnglesArgs) -> Result<AnglesOutput, Box<dyn Error>> {
    let pose = load_pose(&args.pose)?;
    let angles = calculate_angles(&pose)?;
    let comparison = match args.posture.as_deref() {
        Some(name) => {
            let posture = parse_posture(name)?;
            let catalog = load_catalog(args.catalog.as_deref())?;
            Some(compare_angles(&pose, posture, &catalog))
        }
        None => None,
    };
    Ok(AnglesOutput { angles, comparison })
}

pub fn run(args: &AnglesArgs) -> Result<(), Box<dyn Error>> {
    print_json(&build(args)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;
    use wushu_core::Pose;

    #[test]
    fn lists_ten_angles_with_comparison() {
        let dir = tempfile::tempdir().unwrap();
        let pose = fixtures::write_pose(&dir, "pose.json", &fixtures::master());
        let args = AnglesArgs {
            pose,
            posture: Some("gongbuchongquan".into()),
            catalog: None,
        };
        let output = build(&args).unwrap();
        assert_eq!(output.angles.len(), 10);
        assert_eq!(output.comparison.unwrap().rows.len(), 10);
    }

    #[test]
    fn short_pose_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let short: Pose = fixtures::master().points()[..6].iter().copied().collect();
        let pose = fixtures::write_pose(&dir, "pose.json", &short);
        let args = AnglesArgs {
            pose,
            posture: None,
            catalog: None,
        };
        let err = build(&args).unwrap_err();
        assert!(err.to_string().contains("insufficient-keypoints"));
    }
}
