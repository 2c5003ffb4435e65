//! Tests for f1-model types.

use f1_model::{DriverRef, FastestLap, Race, RaceResult, parse_race_date};

fn finisher(position: u32, code: &str, name: &str, points: f64) -> RaceResult {
    RaceResult {
        position: Some(position),
        points,
        ..RaceResult::new(DriverRef::new(code, name, "Mercedes"))
    }
}

fn race(results: Vec<RaceResult>) -> Race {
    let mut race = Race {
        season: 2018,
        round: 1,
        name: "Australian Grand Prix".to_string(),
        circuit: "Albert Park Grand Prix Circuit".to_string(),
        location: "Melbourne, Australia".to_string(),
        date: parse_race_date("2018-03-25").unwrap(),
        winner: None,
        results: Vec::new(),
    };
    race.set_results(results);
    race
}

#[test]
fn set_results_refreshes_winner() {
    let mut race = race(vec![
        finisher(2, "HAM", "Lewis Hamilton", 18.0),
        finisher(1, "VET", "Sebastian Vettel", 25.0),
    ]);
    assert_eq!(race.winner.as_ref().map(|w| w.code.as_str()), Some("VET"));

    race.set_results(Vec::new());
    assert!(race.winner.is_none());
}

#[test]
fn podium_skips_unclassified() {
    let mut retired = RaceResult::new(DriverRef::new("VER", "Max Verstappen", "Red Bull"));
    retired.status = Some("Retired".to_string());
    let race = race(vec![
        retired,
        finisher(3, "RAI", "Kimi Raikkonen", 15.0),
        finisher(1, "VET", "Sebastian Vettel", 25.0),
        finisher(4, "RIC", "Daniel Ricciardo", 12.0),
        finisher(2, "HAM", "Lewis Hamilton", 18.0),
    ]);
    let codes: Vec<&str> = race.podium().iter().map(|r| r.driver.code.as_str()).collect();
    assert_eq!(codes, vec!["VET", "HAM", "RAI"]);
}

#[test]
fn race_document_uses_camel_case_keys() {
    let mut result = finisher(1, "VET", "Sebastian Vettel", 25.0);
    result.fastest_lap = Some(FastestLap {
        lap: Some(54),
        time: "1:26.444".to_string(),
        average_speed: Some(220.8),
    });
    let race = race(vec![result]);

    let json = serde_json::to_value(&race).expect("serialize race");
    let fastest = &json["results"][0]["fastestLap"];
    assert_eq!(fastest["lap"], 54);
    assert_eq!(fastest["averageSpeed"], 220.8);
    assert_eq!(json["winner"]["code"], "VET");
    assert!(json["results"][0].get("grid").is_none());

    let round: Race = serde_json::from_value(json).expect("deserialize race");
    assert_eq!(round, race);
}

#[test]
fn missing_optional_fields_deserialize_as_absent() {
    let json = r#"{
        "season": 2018,
        "round": 3,
        "date": "2018-04-15T00:00:00Z",
        "results": [{ "driver": { "name": "Charles Leclerc" } }]
    }"#;
    let race: Race = serde_json::from_str(json).expect("deserialize race");
    assert!(race.winner.is_none());
    let result = &race.results[0];
    assert_eq!(result.position, None);
    assert_eq!(result.points, 0.0);
    assert_eq!(result.driver.code, "");
}
