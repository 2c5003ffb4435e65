//! Source-specific field mappings and result assembly.
//!
//! Each supported source is mapped once, field by field, into a borrowed
//! [`RawResult`]. Assembly into the canonical [`RaceResult`] only ever sees
//! that view.

use std::borrow::Cow;

use f1_ingest::ResultRow;
use f1_ingest::ergast::ErgastResult;
use f1_model::{DriverRef, FastestLap, RaceResult};

use crate::driver_code::DriverCodes;
use crate::numeric::{parse_count, parse_number, parse_points, parse_position};
use crate::status::derive_status;

/// Uniform text view of one raw result entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawResult<'a> {
    pub position: &'a str,
    pub code: &'a str,
    pub driver_name: Cow<'a, str>,
    pub team: &'a str,
    pub grid: &'a str,
    pub laps: &'a str,
    pub time: &'a str,
    pub status: &'a str,
    pub points: &'a str,
    pub fl_lap: &'a str,
    pub fl_time: &'a str,
    pub fl_avg: &'a str,
}

impl<'a> From<&'a ResultRow> for RawResult<'a> {
    fn from(row: &'a ResultRow) -> Self {
        Self {
            position: &row.position,
            code: &row.code,
            driver_name: Cow::Borrowed(&row.driver_name),
            team: &row.team,
            grid: &row.grid,
            laps: &row.laps,
            time: &row.time,
            status: &row.status,
            points: &row.points,
            fl_lap: &row.fl_lap,
            fl_time: &row.fl_time,
            fl_avg: &row.fl_avg,
        }
    }
}

impl<'a> From<&'a ErgastResult> for RawResult<'a> {
    fn from(result: &'a ErgastResult) -> Self {
        let driver = result.driver.as_ref();
        let fastest = result.fastest_lap.as_ref();
        Self {
            position: &result.position,
            code: driver.and_then(|d| d.code.as_deref()).unwrap_or(""),
            driver_name: Cow::Owned(driver.map(|d| d.full_name()).unwrap_or_default()),
            team: result.constructor.as_ref().map_or("", |c| c.name.as_str()),
            grid: &result.grid,
            laps: &result.laps,
            time: result.time.as_ref().map_or("", |t| t.time.as_str()),
            status: result.status.as_deref().unwrap_or(""),
            points: &result.points,
            fl_lap: fastest.map_or("", |fl| fl.lap.as_str()),
            fl_time: fastest
                .and_then(|fl| fl.time.as_ref())
                .map_or("", |t| t.time.as_str()),
            fl_avg: fastest
                .and_then(|fl| fl.average_speed.as_ref())
                .map_or("", |s| s.speed.as_str()),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl RawResult<'_> {
    /// The driver reference this entry describes.
    pub fn driver_ref(&self, codes: &DriverCodes) -> DriverRef {
        let name = self.driver_name.trim();
        DriverRef {
            code: codes.derive(name, Some(self.code)),
            name: name.to_string(),
            team: self.team.trim().to_string(),
        }
    }

    /// Assembles the canonical result. Malformed fields become absent.
    pub fn build(&self, codes: &DriverCodes) -> RaceResult {
        let fastest_lap = non_empty(self.fl_time).map(|time| FastestLap {
            lap: parse_count(self.fl_lap),
            time,
            average_speed: parse_number(self.fl_avg),
        });

        RaceResult {
            position: parse_position(self.position),
            driver: self.driver_ref(codes),
            grid: parse_count(self.grid),
            laps: parse_count(self.laps),
            time: non_empty(self.time),
            status: derive_status(Some(self.status), Some(self.position), Some(self.time)),
            points: parse_points(self.points),
            fastest_lap,
        }
    }
}
