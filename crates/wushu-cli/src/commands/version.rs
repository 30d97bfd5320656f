use std::error::Error;

use clap::Args;
use serde::Serialize;

use super::print_json;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit the version with the built-in catalog fingerprint as JSON.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: String,
    catalog_fingerprint: String,
    postures: usize,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let catalog = wushu_catalog::ReferenceCatalog::builtin();
    let info = VersionInfo {
        version: env!("CARGO_PKG_VERSION").into(),
        catalog_fingerprint: catalog.fingerprint()?,
        postures: catalog.postures().count(),
    };
    print_json(&info)
}
