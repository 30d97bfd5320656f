use serde::{Deserialize, Serialize};
use tracing::debug;
use wushu_catalog::ReferenceCatalog;
use wushu_core::{JointGroup, Pose, PostureId};

use crate::angles::calculate_angles;

/// Deviation tolerated before an angle loses points.
const AGREEMENT_TOLERANCE: f64 = 5.0;
/// Points lost per tolerance step beyond the tolerance.
const AGREEMENT_STEP_PENALTY: f64 = 0.5;

/// Practitioner versus master for one tracked angle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleComparison {
    pub group: JointGroup,
    pub label: String,
    pub practitioner: f64,
    pub master: f64,
    /// Practitioner minus master.
    pub delta: f64,
}

/// Per-angle rows against the master profile plus their agreement score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub posture: PostureId,
    pub rows: Vec<AngleComparison>,
    pub agreement: f64,
}

/// Agreement between two angle profiles, 0 to 10.
///
/// Deviations up to five degrees are free; each further five degrees cost
/// half a point per angle. Profiles are aligned by position and an empty
/// overlap scores zero.
pub fn angle_agreement(practitioner: &[f64], master: &[f64]) -> f64 {
    let per_angle: Vec<f64> = practitioner
        .iter()
        .zip(master)
        .map(|(p, m)| {
            let excess = ((p - m).abs() - AGREEMENT_TOLERANCE).max(0.0);
            (10.0 - excess / AGREEMENT_TOLERANCE * AGREEMENT_STEP_PENALTY).max(0.0)
        })
        .collect();
    if per_angle.is_empty() {
        return 0.0;
    }
    per_angle.iter().sum::<f64>() / per_angle.len() as f64
}

/// Compares a pose's angles with the posture's master profile.
///
/// A pose whose angles cannot be measured yields an empty report.
pub fn compare_angles(
    pose: &Pose,
    posture: PostureId,
    catalog: &ReferenceCatalog,
) -> ComparisonReport {
    let master = catalog.master_angles(posture);
    let angles = match calculate_angles(pose) {
        Ok(angles) => angles,
        Err(err) => {
            debug!(posture = posture.code(), code = err.code(), "angles unavailable for comparison");
            Vec::new()
        }
    };
    let rows: Vec<AngleComparison> = angles
        .into_iter()
        .zip(master)
        .map(|(angle, &master)| AngleComparison {
            group: angle.group,
            delta: angle.degrees - master,
            practitioner: angle.degrees,
            master,
            label: angle.label,
        })
        .collect();
    let measured: Vec<f64> = rows.iter().map(|row| row.practitioner).collect();
    let masters: Vec<f64> = rows.iter().map(|row| row.master).collect();
    ComparisonReport {
        posture,
        agreement: angle_agreement(&measured, &masters),
        rows,
    }
}
