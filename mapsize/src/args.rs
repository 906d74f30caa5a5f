use std::path::PathBuf;

use clap::Parser;

use crate::config::MapsizeConfig;
use crate::format::DEFAULT_TOP;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "mapsize")]
#[command(about = "Aggregate .text/.data/.bss sizes by object from a GNU ld map file", long_about = None)]
pub struct Cli {
    /// Path to the linker .map file.
    pub mapfile: PathBuf,

    /// Show the top N objects in the table (the CSV always has every row).
    #[arg(long)]
    pub top: Option<usize>,

    /// Also write every row to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Do not print the limitations footer.
    #[arg(long)]
    pub no_notes: bool,

    /// Print scan statistics and image-wide section totals.
    #[arg(long)]
    pub stats: bool,

    /// Read settings from this file instead of discovering one.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Debug-level diagnostics on stderr.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Settings after layering flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    pub mapfile: PathBuf,
    pub top: usize,
    pub csv: Option<PathBuf>,
    pub notes: bool,
    pub show_stats: bool,
    pub verbose: bool,
}

pub fn derive_args(cli: &Cli, cfg: &MapsizeConfig) -> ParsedArgs {
    ParsedArgs {
        mapfile: cli.mapfile.clone(),
        top: cli.top.or(cfg.top).unwrap_or(DEFAULT_TOP),
        csv: cli
            .csv
            .clone()
            .or_else(|| cfg.csv.as_ref().map(PathBuf::from)),
        notes: !cli.no_notes && cfg.notes.unwrap_or(true),
        show_stats: cli.stats || cfg.show_stats.unwrap_or(false),
        verbose: cli.verbose || cfg.verbose.unwrap_or(false),
    }
}
