use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::driver::DriverRef;

/// Fastest-lap record attached to a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FastestLap {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lap: Option<u32>,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_speed: Option<f64>,
}

/// One driver's outcome in one race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceResult {
    /// Classified position. `None` for retirements and other non-finishers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    pub driver: DriverRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub laps: Option<u32>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub points: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fastest_lap: Option<FastestLap>,
}

impl RaceResult {
    pub fn new(driver: DriverRef) -> Self {
        Self {
            position: None,
            driver,
            grid: None,
            laps: None,
            time: None,
            status: None,
            points: 0.0,
            fastest_lap: None,
        }
    }

    pub fn is_win(&self) -> bool {
        self.position == Some(1)
    }

    /// Time when present, otherwise the status, otherwise `-`.
    pub fn time_or_status(&self) -> &str {
        self.time
            .as_deref()
            .filter(|t| !t.is_empty())
            .or(self.status.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or("-")
    }
}

/// Orders results by ascending position with unclassified results last.
///
/// Two unclassified results compare equal, so a stable sort keeps their
/// input order.
pub fn cmp_by_position(a: &RaceResult, b: &RaceResult) -> Ordering {
    match (a.position, b.position) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(position: Option<u32>) -> RaceResult {
        RaceResult {
            position,
            ..RaceResult::new(DriverRef::new("TST", "Test Driver", "Team"))
        }
    }

    #[test]
    fn unclassified_sorts_after_classified() {
        assert_eq!(cmp_by_position(&result(Some(20)), &result(None)), Ordering::Less);
        assert_eq!(cmp_by_position(&result(None), &result(Some(1))), Ordering::Greater);
        assert_eq!(cmp_by_position(&result(None), &result(None)), Ordering::Equal);
    }

    #[test]
    fn time_or_status_falls_back() {
        let mut r = result(Some(1));
        assert_eq!(r.time_or_status(), "-");
        r.status = Some("Finished".to_string());
        assert_eq!(r.time_or_status(), "Finished");
        r.time = Some("1:29:33.283".to_string());
        assert_eq!(r.time_or_status(), "1:29:33.283");
    }
}
