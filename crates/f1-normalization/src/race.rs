//! Race-level normalization and season assembly.

use std::collections::BTreeMap;

use f1_ingest::ergast::{ErgastRace, ErgastResult};
use f1_model::{DriverRef, ModelError, Race, RaceResult, cmp_by_position, parse_race_date};

use crate::driver_code::DriverCodes;
use crate::result::RawResult;

/// Stateless result normalizer configured with a driver-code table.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    codes: DriverCodes,
}

impl Normalizer {
    pub fn new(codes: DriverCodes) -> Self {
        Self { codes }
    }

    /// Builds one canonical result.
    pub fn build_result(&self, raw: &RawResult<'_>) -> RaceResult {
        raw.build(&self.codes)
    }

    /// Builds every entry of one race, drops nameless entries, and orders
    /// the rest by position with unclassified entries last.
    ///
    /// The sort is stable: entries sharing a position, and all unclassified
    /// entries, keep their input order.
    pub fn normalize_race<'a, I>(&self, entries: I) -> Vec<RaceResult>
    where
        I: IntoIterator<Item = RawResult<'a>>,
    {
        let mut dropped = 0usize;
        let mut results: Vec<RaceResult> = entries
            .into_iter()
            .map(|raw| self.build_result(&raw))
            .filter(|result| {
                let keep = !result.driver.name.is_empty();
                if !keep {
                    dropped += 1;
                }
                keep
            })
            .collect();
        results.sort_by(cmp_by_position);

        if dropped > 0 {
            tracing::debug!(
                dropped,
                kept = results.len(),
                "dropped results without a driver name"
            );
        }
        results
    }

    /// The entry whose raw position is exactly `"1"`.
    pub fn pick_winner(&self, entries: &[RawResult<'_>]) -> Option<DriverRef> {
        entries
            .iter()
            .find(|raw| raw.position == "1")
            .map(|raw| raw.driver_ref(&self.codes))
    }

    /// Assembles one race document from an Ergast schedule entry and its
    /// result entries.
    pub fn build_race(
        &self,
        schedule: &ErgastRace,
        results: &[ErgastResult],
    ) -> Result<Race, ModelError> {
        let season = parse_field::<u16>("season", &schedule.season)?;
        let round = parse_field::<u32>("round", &schedule.round)?;
        let date = parse_race_date(&schedule.date)?;

        let raw: Vec<RawResult<'_>> = results.iter().map(RawResult::from).collect();
        let winner = self.pick_winner(&raw);
        let results = self.normalize_race(raw);

        let circuit = schedule.circuit.as_ref();
        let location = circuit
            .and_then(|c| c.location.as_ref())
            .map(|loc| {
                [loc.locality.as_deref(), loc.country.as_deref()]
                    .into_iter()
                    .flatten()
                    .filter(|part| !part.is_empty())
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default();

        Ok(Race {
            season,
            round,
            name: schedule.race_name.clone(),
            circuit: circuit.map(|c| c.circuit_name.clone()).unwrap_or_default(),
            location,
            date,
            winner,
            results,
        })
    }

    /// Joins a season schedule with a separate results payload by round.
    ///
    /// A schedule entry with no matching results entry falls back to its own
    /// embedded results (empty for a pure schedule).
    pub fn build_season(
        &self,
        schedule: &[ErgastRace],
        results: &[ErgastRace],
    ) -> Result<Vec<Race>, ModelError> {
        let mut by_round: BTreeMap<u32, &[ErgastResult]> = BTreeMap::new();
        for race in results {
            match race.round.trim().parse::<u32>() {
                Ok(round) => {
                    by_round.insert(round, race.results.as_slice());
                }
                Err(_) => {
                    tracing::warn!(round = %race.round, "skipping results with invalid round");
                }
            }
        }

        schedule
            .iter()
            .map(|race| {
                let entries = race
                    .round
                    .trim()
                    .parse::<u32>()
                    .ok()
                    .and_then(|round| by_round.get(&round).copied())
                    .unwrap_or(race.results.as_slice());
                self.build_race(race, entries)
            })
            .collect()
    }
}

fn parse_field<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, ModelError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ModelError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}
