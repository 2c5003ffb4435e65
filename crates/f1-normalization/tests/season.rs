//! Tests for assembling a season from Ergast payloads.

use std::path::Path;

use f1_ingest::ergast::parse_ergast;
use f1_normalization::{DriverCodes, Normalizer};

const SCHEDULE: &str = r#"{"MRData": {"RaceTable": {"Races": [
  {"season": "2018", "round": "1", "raceName": "Australian Grand Prix", "date": "2018-03-25",
   "Circuit": {"circuitName": "Albert Park Grand Prix Circuit",
               "Location": {"locality": "Melbourne", "country": "Australia"}}},
  {"season": "2018", "round": "2", "raceName": "Bahrain Grand Prix", "date": "2018-04-08",
   "Circuit": {"circuitName": "Bahrain International Circuit",
               "Location": {"locality": "", "country": "Bahrain"}}}
]}}}"#;

const RESULTS: &str = r#"{"MRData": {"RaceTable": {"Races": [
  {"season": "2018", "round": "1", "Results": [
    {"position": "2", "points": "18", "grid": "1", "laps": "58", "status": "Finished",
     "Driver": {"code": "HAM", "givenName": "Lewis", "familyName": "Hamilton"},
     "Constructor": {"name": "Mercedes"}, "Time": {"time": "+5.036"}},
    {"position": "1", "points": "25", "grid": "3", "laps": "58", "status": "Finished",
     "Driver": {"code": "VET", "givenName": "Sebastian", "familyName": "Vettel"},
     "Constructor": {"name": "Ferrari"}, "Time": {"time": "1:29:33.283"},
     "FastestLap": {"lap": "54", "Time": {"time": "1:26.444"}, "AverageSpeed": {"speed": "220.842"}}},
    {"position": "20", "points": "0", "grid": "8", "laps": "5", "status": "Engine",
     "Driver": {"givenName": "Brendon", "familyName": "Hartley"},
     "Constructor": {"name": "Toro Rosso"}}
  ]}
]}}}"#;

#[test]
fn season_joins_results_by_round() {
    let schedule = parse_ergast(SCHEDULE, Path::new("schedule.json")).expect("schedule");
    let results = parse_ergast(RESULTS, Path::new("results.json")).expect("results");
    let normalizer = Normalizer::new(DriverCodes::builtin());

    let races = normalizer
        .build_season(schedule.races(), results.races())
        .expect("build season");
    assert_eq!(races.len(), 2);

    let australia = &races[0];
    assert_eq!(australia.season, 2018);
    assert_eq!(australia.round, 1);
    assert_eq!(australia.location, "Melbourne, Australia");
    assert_eq!(australia.date.to_rfc3339(), "2018-03-25T00:00:00+00:00");
    assert_eq!(australia.winner.as_ref().map(|w| w.code.as_str()), Some("VET"));

    let codes: Vec<&str> = australia.results.iter().map(|r| r.driver.code.as_str()).collect();
    assert_eq!(codes, vec!["VET", "HAM", "HAR"]);
    assert_eq!(australia.results[2].status.as_deref(), Some("Engine"));
    let fastest = australia.results[0].fastest_lap.as_ref().expect("fastest lap");
    assert_eq!(fastest.average_speed, Some(220.842));

    let bahrain = &races[1];
    assert_eq!(bahrain.location, "Bahrain");
    assert!(bahrain.results.is_empty());
    assert!(bahrain.winner.is_none());
}
