use std::path::PathBuf;

use f1_model::Race;
use f1_standings::Standings;
use f1_store::UpsertSummary;

#[derive(Debug)]
pub struct TemplatesResult {
    pub season: u16,
    pub dir: PathBuf,
    pub files: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct PasteResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
}

#[derive(Debug)]
pub struct ExportResult {
    pub season: u16,
    pub races: usize,
    pub results: usize,
    pub store_file: PathBuf,
    pub upsert: UpsertSummary,
}

#[derive(Debug)]
pub struct ImportResult {
    pub season: u16,
    pub dir: PathBuf,
    pub rounds: Vec<RoundImport>,
    pub has_errors: bool,
}

#[derive(Debug)]
pub struct RoundImport {
    pub round: u32,
    pub path: PathBuf,
    pub outcome: RoundOutcome,
}

#[derive(Debug)]
pub enum RoundOutcome {
    Updated {
        results: usize,
        winner: Option<String>,
    },
    /// No stored race for the round; the file was skipped.
    MissingRace,
    Failed(String),
}

#[derive(Debug)]
pub struct StandingsResult {
    pub season: u16,
    pub races: Vec<Race>,
    pub standings: Standings,
}
