#![doc = "Reference pose catalog for the wushu scoring engine. The catalog is an immutable value built once at startup and passed to the scorers."]

/// Shipped reference data.
pub mod builtin;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use wushu_core::errors::{ErrorInfo, WushuError};
use wushu_core::{stable_hash_string, JointGroup, Pose, PostureId};

pub use builtin::DEFAULT_MASTER_ANGLES;

/// Score below which the low coaching tier applies.
pub const COACHING_LOW_BELOW: f64 = 5.0;
/// Score below which the middle coaching tier applies.
pub const COACHING_MID_BELOW: f64 = 8.0;
/// Message used when a posture has no coaching tiers.
pub const GENERIC_COACHING_TIP: &str = "请保持动作，系统正在分析...";

/// Target degrees per joint group for the angle sub-score.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdealAngleMap(BTreeMap<JointGroup, f64>);

impl IdealAngleMap {
    /// Target for `group`, if authored.
    pub fn get(&self, group: JointGroup) -> Option<f64> {
        self.0.get(&group).copied()
    }

    /// Number of authored targets.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no targets are authored.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Targets in joint group order.
    pub fn iter(&self) -> impl Iterator<Item = (JointGroup, f64)> + '_ {
        self.0.iter().map(|(group, degrees)| (*group, *degrees))
    }
}

impl FromIterator<(JointGroup, f64)> for IdealAngleMap {
    fn from_iter<I: IntoIterator<Item = (JointGroup, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Live coaching messages keyed by score tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachingTiers {
    /// Message for scores below [`COACHING_LOW_BELOW`].
    pub low: String,
    /// Message for scores below [`COACHING_MID_BELOW`].
    pub mid: String,
    /// Message for everything above.
    pub high: String,
}

impl CoachingTiers {
    /// Message for the tier containing `score`.
    pub fn for_score(&self, score: f64) -> &str {
        if score < COACHING_LOW_BELOW {
            &self.low
        } else if score < COACHING_MID_BELOW {
            &self.mid
        } else {
            &self.high
        }
    }
}

/// Reference data for one posture.
///
/// The master pose and the ideal angles are authored independently: the
/// position sub-score uses the pose, the angle sub-score uses the map.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReferencePosture {
    /// Master keypoints, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_pose: Option<Pose>,
    /// Targets for the angle sub-score.
    #[serde(default)]
    pub ideal_angles: IdealAngleMap,
    /// Master's measured angles in tracked-angle order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_angles: Option<Vec<f64>>,
    /// Static form cue appended to corrective feedback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cue: Option<String>,
    /// Tiered live coaching messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coaching: Option<CoachingTiers>,
}

/// One row of [`ReferenceCatalog::summary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntrySummary {
    /// Posture identifier.
    pub posture: PostureId,
    /// Chinese display name.
    pub name: String,
    /// Whether a master pose is registered.
    pub has_reference_pose: bool,
    /// Number of ideal angle targets.
    pub ideal_angle_count: usize,
    /// Whether a static form cue exists.
    pub has_cue: bool,
}

/// Immutable posture catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReferenceCatalog {
    #[serde(default)]
    postures: BTreeMap<PostureId, ReferencePosture>,
}

fn catalog_error(code: &str, err: impl ToString) -> WushuError {
    WushuError::Serde(ErrorInfo::new(code, err.to_string()))
}

impl ReferenceCatalog {
    /// Catalog carrying the shipped reference data.
    pub fn builtin() -> Self {
        Self {
            postures: builtin::entries(),
        }
    }

    /// Builds a catalog from explicit entries.
    pub fn from_entries(entries: impl IntoIterator<Item = (PostureId, ReferencePosture)>) -> Self {
        Self {
            postures: entries.into_iter().collect(),
        }
    }

    /// Parses a catalog from JSON bytes.
    pub fn from_json_slice(data: &[u8]) -> Result<Self, WushuError> {
        serde_json::from_slice(data).map_err(|err| catalog_error("catalog-json-read", err))
    }

    /// Parses a catalog from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, WushuError> {
        serde_yaml::from_str(text).map_err(|err| catalog_error("catalog-yaml-read", err))
    }

    /// Returns a new catalog with the master pose for `posture` set.
    pub fn with_reference_pose(&self, posture: PostureId, pose: Pose) -> Self {
        let mut postures = self.postures.clone();
        postures.entry(posture).or_default().master_pose = Some(pose);
        Self { postures }
    }

    /// Entry for `posture`, if catalogued.
    pub fn get(&self, posture: PostureId) -> Option<&ReferencePosture> {
        self.postures.get(&posture)
    }

    /// Catalogued postures in enum order.
    pub fn postures(&self) -> impl Iterator<Item = PostureId> + '_ {
        self.postures.keys().copied()
    }

    /// Master pose for `posture`.
    pub fn reference_pose(&self, posture: PostureId) -> Result<&Pose, WushuError> {
        self.get(posture)
            .and_then(|entry| entry.master_pose.as_ref())
            .filter(|pose| !pose.is_empty())
            .ok_or_else(|| WushuError::missing_reference(posture.code()))
    }

    /// Ideal angle targets for `posture`; `None` when none are authored.
    pub fn ideal_angles(&self, posture: PostureId) -> Option<&IdealAngleMap> {
        self.get(posture)
            .map(|entry| &entry.ideal_angles)
            .filter(|map| !map.is_empty())
    }

    /// Master angle profile, falling back to [`DEFAULT_MASTER_ANGLES`].
    pub fn master_angles(&self, posture: PostureId) -> &[f64] {
        self.get(posture)
            .and_then(|entry| entry.master_angles.as_deref())
            .unwrap_or(&DEFAULT_MASTER_ANGLES)
    }

    /// Static form cue for `posture`.
    pub fn cue(&self, posture: PostureId) -> Option<&str> {
        self.get(posture).and_then(|entry| entry.cue.as_deref())
    }

    /// Tiered coaching message for a live score.
    pub fn coaching_tip(&self, posture: PostureId, score: f64) -> &str {
        self.get(posture)
            .and_then(|entry| entry.coaching.as_ref())
            .map(|tiers| tiers.for_score(score))
            .unwrap_or(GENERIC_COACHING_TIP)
    }

    /// Per-posture overview.
    pub fn summary(&self) -> Vec<CatalogEntrySummary> {
        self.postures
            .iter()
            .map(|(posture, entry)| CatalogEntrySummary {
                posture: *posture,
                name: posture.name().to_string(),
                has_reference_pose: entry.master_pose.as_ref().is_some_and(|p| !p.is_empty()),
                ideal_angle_count: entry.ideal_angles.len(),
                has_cue: entry.cue.is_some(),
            })
            .collect()
    }

    /// SHA-256 of the canonical JSON form, identifying the reference set.
    pub fn fingerprint(&self) -> Result<String, WushuError> {
        stable_hash_string(self)
    }
}
