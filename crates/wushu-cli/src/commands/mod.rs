pub mod angles;
pub mod catalog;
pub mod score;
pub mod session;
pub mod version;

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Serialize;
use wushu_catalog::ReferenceCatalog;
use wushu_core::{from_json_slice, to_canonical_json_bytes, Pose, PostureId};
use wushu_score::ScoringConfig;

fn boxed(err: wushu_core::WushuError) -> Box<dyn Error> {
    Box::new(err)
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Reads a pose file: a JSON array of `[x, y, z]` or `[x, y]` entries.
pub(crate) fn load_pose(path: &Path) -> Result<Pose, Box<dyn Error>> {
    let bytes = fs::read(path)?;
    from_json_slice(&bytes).map_err(boxed)
}

/// Reads a frame stream: a JSON array whose entries are poses or `null`.
pub(crate) fn load_frames(path: &Path) -> Result<Vec<Option<Pose>>, Box<dyn Error>> {
    let bytes = fs::read(path)?;
    from_json_slice(&bytes).map_err(boxed)
}

/// Built-in catalog, or a JSON/YAML catalog file when given.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<ReferenceCatalog, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(ReferenceCatalog::builtin());
    };
    let catalog = if is_yaml(path) {
        ReferenceCatalog::from_yaml_str(&fs::read_to_string(path)?)
    } else {
        ReferenceCatalog::from_json_slice(&fs::read(path)?)
    };
    catalog.map_err(boxed)
}

/// Default configuration, or a JSON/YAML configuration file when given.
pub(crate) fn load_config(path: Option<&Path>) -> Result<ScoringConfig, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(ScoringConfig::default());
    };
    let config = if is_yaml(path) {
        ScoringConfig::from_yaml_str(&fs::read_to_string(path)?)
    } else {
        ScoringConfig::from_json_slice(&fs::read(path)?)
    };
    config.map_err(boxed)
}

pub(crate) fn parse_posture(name: &str) -> Result<PostureId, Box<dyn Error>> {
    name.parse::<PostureId>().map_err(boxed)
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    let json = to_canonical_json_bytes(value).map_err(boxed)?;
    println!("{}", String::from_utf8(json)?);
    Ok(())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;
    use wushu_catalog::builtin::MASTER_GONG_BU_CHONG_QUAN;
    use wushu_core::Pose;

    pub fn master() -> Pose {
        MASTER_GONG_BU_CHONG_QUAN.into()
    }

    pub fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn write_pose(dir: &TempDir, name: &str, pose: &Pose) -> PathBuf {
        write(dir, name, &serde_json::to_string(pose).unwrap())
    }
}
