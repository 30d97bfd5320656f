use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    angles::{self, AnglesArgs},
    catalog::{self, CatalogArgs},
    score::{self, ScoreArgs},
    session::{self, SessionArgs},
    version::{self, VersionArgs},
};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "wushu", about = "Martial-arts posture scoring CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a pose against a catalog posture.
    Score(ScoreArgs),
    /// Print the tracked angles of a pose, optionally against a master profile.
    Angles(AnglesArgs),
    /// Summarise the reference catalog or print one entry.
    Catalog(CatalogArgs),
    /// Score a stream of frames and report the best one.
    Session(SessionArgs),
    /// Print the CLI version.
    Version(VersionArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Score(args) => score::run(&args),
        Command::Angles(args) => angles::run(&args),
        Command::Catalog(args) => catalog::run(&args),
        Command::Session(args) => session::run(&args),
        Command::Version(args) => version::run(&args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_requires_posture_and_pose() {
        assert!(Cli::try_parse_from(["wushu", "score", "--posture", "弓步冲拳"]).is_err());
        let cli =
            Cli::try_parse_from(["wushu", "score", "--posture", "弓步冲拳", "--pose", "p.json"])
                .unwrap();
        assert!(matches!(cli.command, Command::Score(_)));
    }

    #[test]
    fn session_stride_defaults_to_ten() {
        let cli = Cli::try_parse_from([
            "wushu",
            "session",
            "--posture",
            "gong_bu_chong_quan",
            "--frames",
            "f.json",
        ])
        .unwrap();
        match cli.command {
            Command::Session(args) => assert_eq!(args.stride, 10),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
