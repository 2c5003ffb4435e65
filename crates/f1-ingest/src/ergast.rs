//! Ergast-style race result JSON.
//!
//! Only the fields the importer maps are modeled; everything else in the
//! payload is ignored. Ergast encodes every scalar as a string.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{IngestError, Result};

/// Default base URL of the Ergast API.
pub const DEFAULT_BASE_URL: &str = "https://ergast.com/api/f1";

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("f1data/", env!("CARGO_PKG_VERSION"));

/// Top level of an Ergast response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErgastResponse {
    #[serde(rename = "MRData", default)]
    pub mr_data: MrData,
}

impl ErgastResponse {
    /// Races in the response, empty when the table is missing.
    pub fn races(&self) -> &[ErgastRace] {
        &self.mr_data.race_table.races
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MrData {
    #[serde(rename = "RaceTable", default)]
    pub race_table: RaceTable,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RaceTable {
    #[serde(rename = "Races", default)]
    pub races: Vec<ErgastRace>,
}

/// A schedule entry, optionally carrying its results.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErgastRace {
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub round: String,
    #[serde(rename = "raceName", default)]
    pub race_name: String,
    #[serde(default)]
    pub date: String,
    #[serde(rename = "Circuit")]
    pub circuit: Option<ErgastCircuit>,
    #[serde(rename = "Results", default)]
    pub results: Vec<ErgastResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErgastCircuit {
    #[serde(rename = "circuitName", default)]
    pub circuit_name: String,
    #[serde(rename = "Location")]
    pub location: Option<ErgastLocation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErgastLocation {
    pub locality: Option<String>,
    pub country: Option<String>,
}

/// One classified or unclassified entry of a race.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErgastResult {
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub points: String,
    #[serde(default)]
    pub grid: String,
    #[serde(default)]
    pub laps: String,
    pub status: Option<String>,
    #[serde(rename = "Driver")]
    pub driver: Option<ErgastDriver>,
    #[serde(rename = "Constructor")]
    pub constructor: Option<ErgastConstructor>,
    #[serde(rename = "Time")]
    pub time: Option<ErgastTime>,
    #[serde(rename = "FastestLap")]
    pub fastest_lap: Option<ErgastFastestLap>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErgastDriver {
    pub code: Option<String>,
    #[serde(rename = "givenName", default)]
    pub given_name: String,
    #[serde(rename = "familyName", default)]
    pub family_name: String,
}

impl ErgastDriver {
    /// `"<given> <family>"`, trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErgastConstructor {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErgastTime {
    #[serde(default)]
    pub time: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErgastFastestLap {
    #[serde(default)]
    pub lap: String,
    #[serde(rename = "Time")]
    pub time: Option<ErgastTime>,
    #[serde(rename = "AverageSpeed")]
    pub average_speed: Option<ErgastSpeed>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErgastSpeed {
    #[serde(default)]
    pub speed: String,
}

/// Parses an Ergast payload. `path` is only used for error context.
pub fn parse_ergast(text: &str, path: &Path) -> Result<ErgastResponse> {
    serde_json::from_str(text).map_err(|e| IngestError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Reads a saved Ergast payload from disk.
pub fn read_ergast_file(path: &Path) -> Result<ErgastResponse> {
    let text = fs::read_to_string(path).map_err(|e| IngestError::read(path, e))?;
    let response = parse_ergast(&text, path)?;
    tracing::debug!(
        path = %path.display(),
        races = response.races().len(),
        "read ergast payload"
    );
    Ok(response)
}

/// Blocking client for the Ergast HTTP API.
#[derive(Debug, Clone)]
pub struct ErgastClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl ErgastClient {
    /// Creates a client against `base_url` (no trailing slash needed).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT_VALUE)
            .timeout(timeout)
            .build()
            .map_err(|e| IngestError::Http {
                url: base_url.clone(),
                message: format!("failed to create HTTP client: {e}"),
            })?;
        Ok(Self { client, base_url })
    }

    /// URL of the season schedule.
    pub fn schedule_url(&self, season: u16) -> String {
        format!("{}/{season}.json?limit=100", self.base_url)
    }

    /// URL of every result of the season.
    pub fn results_url(&self, season: u16) -> String {
        format!("{}/{season}/results.json?limit=1000", self.base_url)
    }

    /// Fetches the season schedule.
    pub fn fetch_schedule(&self, season: u16) -> Result<ErgastResponse> {
        self.get_json(&self.schedule_url(season))
    }

    /// Fetches every result of the season.
    pub fn fetch_results(&self, season: u16) -> Result<ErgastResponse> {
        self.get_json(&self.results_url(season))
    }

    fn get_json(&self, url: &str) -> Result<ErgastResponse> {
        tracing::debug!(url, "fetching ergast payload");

        let response = self.client.get(url).send().map_err(|e| IngestError::Http {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json().map_err(|e| IngestError::Http {
            url: url.to_string(),
            message: format!("invalid JSON body: {e}"),
        })
    }
}
