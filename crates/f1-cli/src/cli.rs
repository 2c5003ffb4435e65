//! CLI argument definitions for `f1data`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "f1data",
    version,
    about = "Import, store and view Formula 1 season results",
    long_about = "Import Formula 1 race results from Ergast JSON, result CSVs and \
                  pasted Wikipedia tables.\n\n\
                  Stored races feed the race listing, race detail and \
                  championship standings views."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Config file (default: ./f1data.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Directory with one folder of raw files per season.
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Directory holding the stored race documents.
    #[arg(long = "store-dir", value_name = "DIR", global = true)]
    pub store_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write header-only r1.csv..rN.csv result files for a season.
    Templates(TemplatesArgs),

    /// Convert rows pasted from a Wikipedia race table into r<ROUND>.csv.
    Paste(PasteArgs),

    /// Build full race documents from Ergast payloads and store them.
    Ergast(ErgastArgs),

    /// Replace stored race results with the season's r<N>.csv files.
    Import(SeasonArgs),

    /// List stored races.
    Races(RacesArgs),

    /// Show the podium and full results of one race.
    Race(RaceArgs),

    /// Show driver and constructor standings for a season.
    Standings(SeasonArgs),
}

#[derive(Args)]
pub struct SeasonArgs {
    #[arg(value_name = "SEASON")]
    pub season: u16,
}

#[derive(Args)]
pub struct TemplatesArgs {
    #[arg(value_name = "SEASON")]
    pub season: u16,

    /// Number of rounds in the season.
    #[arg(value_name = "ROUNDS", value_parser = clap::value_parser!(u32).range(1..))]
    pub rounds: u32,
}

#[derive(Args)]
pub struct PasteArgs {
    #[arg(value_name = "SEASON")]
    pub season: u16,

    #[arg(value_name = "ROUND", value_parser = clap::value_parser!(u32).range(1..))]
    pub round: u32,

    /// Pasted table (default: <DATA_DIR>/<SEASON>/paste.tsv).
    #[arg(long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,
}

#[derive(Args)]
pub struct ErgastArgs {
    #[arg(value_name = "SEASON")]
    pub season: u16,

    /// Saved schedule payload; skips the HTTP API.
    #[arg(long = "schedule", value_name = "PATH")]
    pub schedule: Option<PathBuf>,

    /// Saved results payload, joined to the schedule by round.
    #[arg(long = "results", value_name = "PATH", requires = "schedule")]
    pub results: Option<PathBuf>,

    /// Ergast API base URL (overrides the config file).
    #[arg(long = "base-url", value_name = "URL")]
    pub base_url: Option<String>,

    /// HTTP timeout in seconds.
    #[arg(long = "timeout", value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,
}

#[derive(Args)]
pub struct RacesArgs {
    /// Only this season; anything that is not a season number lists all.
    #[arg(long = "season", value_name = "SEASON")]
    pub season: Option<String>,
}

#[derive(Args)]
pub struct RaceArgs {
    #[arg(value_name = "SEASON")]
    pub season: u16,

    #[arg(value_name = "ROUND")]
    pub round: u32,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
