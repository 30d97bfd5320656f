use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use wushu_catalog::{CatalogEntrySummary, ReferencePosture};
use wushu_core::PostureId;

use super::{load_catalog, parse_posture, print_json};

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Print this posture's full reference entry instead of the summary.
    #[arg(long)]
    pub posture: Option<String>,
    /// Reference catalog replacing the built-in one (YAML or JSON).
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CatalogOutput {
    Summary {
        fingerprint: String,
        postures: Vec<CatalogEntrySummary>,
    },
    Entry {
        posture: PostureId,
        name: String,
        entry: ReferencePosture,
    },
}

pub fn build(args: &CatalogArgs) -> Result<CatalogOutput, Box<dyn Error>> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let Some(name) = args.posture.as_deref() else {
        return Ok(CatalogOutput::Summary {
            fingerprint: catalog.fingerprint()?,
            postures: catalog.summary(),
        });
    };
    let posture = parse_posture(name)?;
    let entry = catalog
        .get(posture)
        .cloned()
        .ok_or_else(|| format!("posture `{}` is not catalogued", posture.code()))?;
    Ok(CatalogOutput::Entry {
        posture,
        name: posture.name().to_string(),
        entry,
    })
}

pub fn run(args: &CatalogArgs) -> Result<(), Box<dyn Error>> {
    print_json(&build(args)?)
}
