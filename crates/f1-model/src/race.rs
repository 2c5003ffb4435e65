use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::driver::DriverRef;
use crate::error::{ModelError, Result};
use crate::result::RaceResult;

/// Identity of a race document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RaceKey {
    pub season: u16,
    pub round: u32,
}

impl RaceKey {
    pub const fn new(season: u16, round: u32) -> Self {
        Self { season, round }
    }
}

impl fmt::Display for RaceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "season={} round={}", self.season, self.round)
    }
}

/// A race document as persisted in the race store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    pub season: u16,
    pub round: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub circuit: String,
    #[serde(default)]
    pub location: String,
    /// Race day at UTC midnight.
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub winner: Option<DriverRef>,
    #[serde(default)]
    pub results: Vec<RaceResult>,
}

impl Race {
    pub fn key(&self) -> RaceKey {
        RaceKey::new(self.season, self.round)
    }

    /// Replace the results and recompute the winner from them.
    pub fn set_results(&mut self, results: Vec<RaceResult>) {
        self.results = results;
        self.winner = self
            .results
            .iter()
            .find(|r| r.is_win())
            .map(|r| r.driver.clone());
    }

    /// Top three classified results in finishing order.
    pub fn podium(&self) -> Vec<&RaceResult> {
        let mut classified: Vec<&RaceResult> =
            self.results.iter().filter(|r| r.position.is_some()).collect();
        classified.sort_by_key(|r| r.position);
        classified.truncate(3);
        classified
    }
}

/// Parse a race date and pin it to UTC midnight.
///
/// Accepts a bare `YYYY-MM-DD` date or a full RFC 3339 timestamp; the time
/// part of a timestamp is discarded.
pub fn parse_race_date(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();
    let date = match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => DateTime::parse_from_rfc3339(trimmed)
            .map(|dt| dt.with_timezone(&Utc).date_naive())
            .map_err(|_| ModelError::InvalidDate {
                value: value.to_string(),
            })?,
    };
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}
