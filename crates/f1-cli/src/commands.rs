use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, error, info, info_span, warn};

use f1_ingest::ergast::{ErgastClient, ErgastResponse};
use f1_ingest::{
    DRIVER_CODES_FILE, PASTE_FILE, list_round_files, load_driver_codes, read_ergast_file,
    read_paste_file, read_result_rows, round_file_name, write_result_rows, write_template,
};
use f1_model::Race;
use f1_normalization::{DriverCodes, Normalizer, RawResult, paste_to_result_rows};
use f1_standings::build_standings;
use f1_store::{RaceStore, StoreError};

use crate::config::F1Config;
use crate::types::{
    ExportResult, ImportResult, PasteResult, RoundImport, RoundOutcome, StandingsResult,
    TemplatesResult,
};

/// Where `ergast` reads its payloads from.
#[derive(Debug, Clone)]
pub enum ErgastSource {
    /// Saved schedule payload, with results either embedded or in a second file.
    Files {
        schedule: PathBuf,
        results: Option<PathBuf>,
    },
    Http { timeout: Duration },
}

/// Built-in table plus the config overrides plus the season's
/// `driver-codes.json`, later sources winning.
pub fn load_codes(config: &F1Config, season: u16) -> Result<DriverCodes> {
    let path = config.season_dir(season).join(DRIVER_CODES_FILE);
    let file_codes = load_driver_codes(&path).context("load driver codes")?;
    let codes = DriverCodes::builtin()
        .with_custom(&config.driver_codes)
        .with_custom(&file_codes);
    debug!(season, overrides = codes.custom_len(), "driver codes ready");
    Ok(codes)
}

/// Writes header-only `r1.csv..r<rounds>.csv` for a season.
pub fn run_templates(config: &F1Config, season: u16, rounds: u32) -> Result<TemplatesResult> {
    let dir = config.season_dir(season);
    let mut files = Vec::new();
    for round in 1..=rounds {
        let path = dir.join(round_file_name(round));
        write_template(&path).with_context(|| format!("write template round={round}"))?;
        files.push(path);
    }
    info!(season, rounds, dir = %dir.display(), "created templates");
    Ok(TemplatesResult { season, dir, files })
}

/// Converts a pasted race table into `r<round>.csv`.
pub fn run_paste(
    config: &F1Config,
    season: u16,
    round: u32,
    input: Option<&Path>,
) -> Result<PasteResult> {
    let dir = config.season_dir(season);
    let input = input.map_or_else(|| dir.join(PASTE_FILE), Path::to_path_buf);
    let output = dir.join(round_file_name(round));

    let pasted = read_paste_file(&input)?;
    let codes = load_codes(config, season)?;
    let rows = paste_to_result_rows(&pasted, &codes);
    write_result_rows(&output, &rows)
        .with_context(|| format!("write season={season} round={round}"))?;

    info!(season, round, rows = rows.len(), path = %output.display(), "wrote round file");
    Ok(PasteResult {
        input,
        output,
        rows: rows.len(),
    })
}

/// Builds full race documents for a season from Ergast payloads and writes
/// them to the store, replacing rounds that already exist.
pub fn run_ergast(config: &F1Config, season: u16, source: &ErgastSource) -> Result<ExportResult> {
    let span = info_span!("ergast", season);
    let _guard = span.enter();

    let (schedule, results) = match source {
        ErgastSource::Files { schedule, results } => {
            let schedule = read_ergast_file(schedule)?;
            let results = results.as_deref().map(read_ergast_file).transpose()?;
            (schedule, results)
        }
        ErgastSource::Http { timeout } => {
            let client = ErgastClient::new(config.ergast_base_url.as_str(), *timeout)?;
            let schedule = client
                .fetch_schedule(season)
                .with_context(|| format!("fetch schedule season={season}"))?;
            let results = client
                .fetch_results(season)
                .with_context(|| format!("fetch results season={season}"))?;
            (schedule, Some(results))
        }
    };

    let normalizer = Normalizer::new(load_codes(config, season)?);
    let built = normalizer
        .build_season(
            schedule.races(),
            results.as_ref().map(ErgastResponse::races).unwrap_or_default(),
        )
        .with_context(|| format!("build races season={season}"))?;

    let (races, foreign): (Vec<Race>, Vec<Race>) =
        built.into_iter().partition(|race| race.season == season);
    if !foreign.is_empty() {
        warn!(skipped = foreign.len(), "skipping schedule entries from another season");
    }

    let result_count: usize = races.iter().map(|race| race.results.len()).sum();
    let race_count = races.len();
    let store = RaceStore::new(&config.store_dir);
    let upsert = store
        .upsert_races(races)
        .with_context(|| format!("store races season={season}"))?;

    info!(
        races = race_count,
        results = result_count,
        inserted = upsert.inserted,
        replaced = upsert.replaced,
        "exported season"
    );
    Ok(ExportResult {
        season,
        races: race_count,
        results: result_count,
        store_file: store.season_path(season),
        upsert,
    })
}

/// Normalizes every round file of a season and replaces the results of the
/// matching stored races.
///
/// A missing season directory aborts the import. A round file that cannot
/// be read, or whose race is not stored, is reported and skipped.
pub fn run_import(config: &F1Config, season: u16) -> Result<ImportResult> {
    let span = info_span!("import", season);
    let _guard = span.enter();

    let dir = config.season_dir(season);
    let files = list_round_files(&dir).context("list round files")?;
    if files.is_empty() {
        info!(dir = %dir.display(), "no round files found");
    }

    let normalizer = Normalizer::new(load_codes(config, season)?);
    let store = RaceStore::new(&config.store_dir);

    let mut rounds = Vec::with_capacity(files.len());
    for file in files {
        let round = file.round;
        let round_span = info_span!("round", round);
        let _round_guard = round_span.enter();
        let outcome = import_round(&normalizer, &store, season, round, &file.path);
        rounds.push(RoundImport {
            round,
            path: file.path,
            outcome,
        });
    }

    let has_errors = rounds
        .iter()
        .any(|r| matches!(r.outcome, RoundOutcome::Failed(_)));
    Ok(ImportResult {
        season,
        dir,
        rounds,
        has_errors,
    })
}

fn import_round(
    normalizer: &Normalizer,
    store: &RaceStore,
    season: u16,
    round: u32,
    path: &Path,
) -> RoundOutcome {
    let rows = match read_result_rows(path) {
        Ok(rows) => rows,
        Err(e) => {
            error!(path = %path.display(), error = %e, "failed to read round file");
            return RoundOutcome::Failed(e.to_string());
        }
    };
    let results = normalizer.normalize_race(rows.iter().map(RawResult::from));
    debug!(parsed = results.len(), "normalized round");

    match store.update_results(season, round, results) {
        Ok(race) => {
            info!(results = race.results.len(), "updated round");
            RoundOutcome::Updated {
                results: race.results.len(),
                winner: race.winner.map(|w| w.label().to_string()),
            }
        }
        Err(e @ StoreError::RaceNotFound { .. }) => {
            warn!("{e}");
            RoundOutcome::MissingRace
        }
        Err(e) => {
            error!(error = %e, "failed to store round");
            RoundOutcome::Failed(e.to_string())
        }
    }
}

/// Season filter of `races`: anything that is not a season number means
/// every season.
pub fn parse_season_filter(value: Option<&str>) -> Option<u16> {
    value.and_then(|v| v.trim().parse().ok())
}

pub fn run_races(config: &F1Config, season: Option<u16>) -> Result<Vec<Race>> {
    RaceStore::new(&config.store_dir)
        .races(season)
        .context("load races")
}

pub fn run_race(config: &F1Config, season: u16, round: u32) -> Result<Race> {
    RaceStore::new(&config.store_dir)
        .race(season, round)
        .context("load race")?
        .ok_or_else(|| anyhow!("race not found: season={season} round={round}"))
}

pub fn run_standings(config: &F1Config, season: u16) -> Result<StandingsResult> {
    let races = RaceStore::new(&config.store_dir)
        .load_season(season)
        .context("load races")?;
    let standings = build_standings(&races);
    Ok(StandingsResult {
        season,
        races,
        standings,
    })
}
