//! Season files and race upserts.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use f1_model::{Race, RaceKey, RaceResult};

use crate::error::{Result, StoreError};

const SEASON_FILE_SUFFIX: &str = "-races.json";

/// `<season>-races.json`
pub fn season_file_name(season: u16) -> String {
    format!("{season}{SEASON_FILE_SUFFIX}")
}

/// Counts of an upsert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpsertSummary {
    pub inserted: usize,
    pub replaced: usize,
}

/// Directory-backed race store.
#[derive(Debug, Clone)]
pub struct RaceStore {
    root: PathBuf,
}

impl RaceStore {
    /// Store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn season_path(&self, season: u16) -> PathBuf {
        self.root.join(season_file_name(season))
    }

    /// Seasons with a file in the store, ascending.
    pub fn seasons(&self) -> Result<Vec<u16>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::Io {
                    operation: "read directory",
                    path: self.root.clone(),
                    source: e,
                });
            }
        };

        let mut seasons: Vec<u16> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let name = entry.file_name();
                name.to_str()?
                    .strip_suffix(SEASON_FILE_SUFFIX)?
                    .parse::<u16>()
                    .ok()
            })
            .collect();
        seasons.sort_unstable();
        seasons.dedup();
        Ok(seasons)
    }

    /// Races of one season ordered by round; empty when the season has no file.
    pub fn load_season(&self, season: u16) -> Result<Vec<Race>> {
        let path = self.season_path(season);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::Io {
                    operation: "read",
                    path,
                    source: e,
                });
            }
        };

        let mut races: Vec<Race> = serde_json::from_str(&text)
            .map_err(|e| StoreError::Deserialization { path: path.clone(), source: e })?;
        races.sort_by_key(Race::key);
        tracing::debug!(season, races = races.len(), path = %path.display(), "loaded season");
        Ok(races)
    }

    /// Replaces the whole season file.
    ///
    /// Writes to a temp file and renames it over the target so a failed
    /// write never leaves a truncated season behind.
    pub fn save_season(&self, season: u16, races: &[Race]) -> Result<()> {
        let path = self.season_path(season);
        let mut ordered: Vec<&Race> = races.iter().collect();
        ordered.sort_by_key(|race| race.key());

        let bytes = serde_json::to_vec_pretty(&ordered)
            .map_err(|e| StoreError::Serialization { path: path.clone(), source: e })?;

        fs::create_dir_all(&self.root).map_err(|e| StoreError::Io {
            operation: "create directory",
            path: self.root.clone(),
            source: e,
        })?;

        let temp_path = path.with_extension("json.tmp");
        let mut file = File::create(&temp_path).map_err(|e| StoreError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;
        file.write_all(&bytes).map_err(|e| StoreError::Io {
            operation: "write",
            path: temp_path.clone(),
            source: e,
        })?;
        file.sync_all().map_err(|e| StoreError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;
        drop(file);

        fs::rename(&temp_path, &path).map_err(|e| StoreError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: path.clone(),
            source: e,
        })?;

        tracing::info!(season, races = ordered.len(), path = %path.display(), "saved season");
        Ok(())
    }

    /// Inserts or replaces races by `(season, round)`; the last write wins.
    pub fn upsert_races(&self, races: Vec<Race>) -> Result<UpsertSummary> {
        let mut by_season: BTreeMap<u16, Vec<Race>> = BTreeMap::new();
        for race in races {
            by_season.entry(race.season).or_default().push(race);
        }

        let mut summary = UpsertSummary::default();
        for (season, incoming) in by_season {
            let mut stored: BTreeMap<RaceKey, Race> = self
                .load_season(season)?
                .into_iter()
                .map(|race| (race.key(), race))
                .collect();
            for race in incoming {
                if stored.insert(race.key(), race).is_some() {
                    summary.replaced += 1;
                } else {
                    summary.inserted += 1;
                }
            }
            let races: Vec<Race> = stored.into_values().collect();
            self.save_season(season, &races)?;
        }
        Ok(summary)
    }

    /// One stored race.
    pub fn race(&self, season: u16, round: u32) -> Result<Option<Race>> {
        Ok(self
            .load_season(season)?
            .into_iter()
            .find(|race| race.round == round))
    }

    /// Replaces the results of a stored race and refreshes its winner.
    pub fn update_results(
        &self,
        season: u16,
        round: u32,
        results: Vec<RaceResult>,
    ) -> Result<Race> {
        let mut races = self.load_season(season)?;
        let race = races
            .iter_mut()
            .find(|race| race.round == round)
            .ok_or(StoreError::RaceNotFound { season, round })?;
        race.set_results(results);
        let updated = race.clone();

        self.save_season(season, &races)?;
        tracing::debug!(season, round, results = updated.results.len(), "updated race results");
        Ok(updated)
    }

    /// Stored races of one season, or of every season when `season` is
    /// `None`, ordered by season then round.
    pub fn races(&self, season: Option<u16>) -> Result<Vec<Race>> {
        let seasons = match season {
            Some(season) => vec![season],
            None => self.seasons()?,
        };
        let mut races = Vec::new();
        for season in seasons {
            races.extend(self.load_season(season)?);
        }
        Ok(races)
    }
}
