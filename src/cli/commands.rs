//! CLI command definitions

use crate::domain::CommaRepair;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gdxsplit")]
#[command(about = "Reduce a GDX file to selected trading periods", long_about = None)]
#[command(version)]
pub struct Cli {
    /// GDX file to split (a .gms text dump with --dry-run)
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Trading periods to keep (e.g., 1 2 48)
    #[arg(value_name = "PERIODS")]
    pub periods: Vec<String>,

    /// Tool configuration file (default: $GDXSPLIT_CONFIG)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Comma repair policy; overrides the config file
    #[arg(long, value_name = "POLICY", value_enum)]
    pub repair: Option<CommaRepair>,

    /// Keep the dumped and scrubbed .gms files
    #[arg(short, long)]
    pub keep_intermediates: bool,

    /// Scrub an existing text dump to stdout without running converters
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
