//! Race detail rows.

use f1_model::{FastestLap, Race, RaceResult, cmp_by_position};

/// One display row of a race result table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLine {
    pub position: String,
    pub code: String,
    pub name: String,
    pub team: String,
    pub grid: String,
    pub laps: String,
    pub time_or_status: String,
    pub points: String,
    pub fastest_lap: String,
}

impl From<&RaceResult> for ResultLine {
    fn from(result: &RaceResult) -> Self {
        Self {
            position: or_dash(result.position),
            code: result.driver.code.clone(),
            name: result.driver.name.clone(),
            team: result.driver.team.clone(),
            grid: or_dash(result.grid),
            laps: or_dash(result.laps),
            time_or_status: result.time_or_status().to_string(),
            points: result.points.to_string(),
            fastest_lap: result
                .fastest_lap
                .as_ref()
                .map(fastest_lap_label)
                .unwrap_or_default(),
        }
    }
}

fn or_dash(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// `L<lap> <time>`, or empty when the lap number is unknown.
pub fn fastest_lap_label(fastest: &FastestLap) -> String {
    match fastest.lap {
        Some(lap) if lap > 0 => format!("L{lap} {}", fastest.time),
        _ => String::new(),
    }
}

/// Every result of the race in finishing order, unclassified entries last.
pub fn result_lines(race: &Race) -> Vec<ResultLine> {
    let mut results: Vec<&RaceResult> = race.results.iter().collect();
    results.sort_by(|a, b| cmp_by_position(a, b));
    results.into_iter().map(ResultLine::from).collect()
}
