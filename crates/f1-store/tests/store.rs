//! Race store behaviour against a temporary directory.

use chrono::{DateTime, Utc};
use f1_model::{DriverRef, Race, RaceResult};
use f1_store::{RaceStore, StoreError, UpsertSummary};
use tempfile::tempdir;

fn race(season: u16, round: u32, name: &str) -> Race {
    Race {
        season,
        round,
        name: name.to_string(),
        circuit: "Circuit".to_string(),
        location: "Somewhere".to_string(),
        date: DateTime::<Utc>::UNIX_EPOCH,
        winner: None,
        results: Vec::new(),
    }
}

fn finisher(position: u32, code: &str, points: f64) -> RaceResult {
    RaceResult {
        position: Some(position),
        points,
        ..RaceResult::new(DriverRef::new(code, code, "Team"))
    }
}

#[test]
fn upsert_is_last_write_wins_per_round() {
    let dir = tempdir().unwrap();
    let store = RaceStore::new(dir.path());

    let first = store
        .upsert_races(vec![race(2018, 1, "Australia"), race(2018, 2, "Bahrain")])
        .unwrap();
    assert_eq!(first, UpsertSummary { inserted: 2, replaced: 0 });

    let second = store
        .upsert_races(vec![race(2018, 2, "Bahrain GP"), race(2019, 1, "Australia 2019")])
        .unwrap();
    assert_eq!(second, UpsertSummary { inserted: 1, replaced: 1 });

    let season = store.load_season(2018).unwrap();
    let names: Vec<&str> = season.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Australia", "Bahrain GP"]);

    let all: Vec<(u16, u32)> = store
        .races(None)
        .unwrap()
        .iter()
        .map(|r| (r.season, r.round))
        .collect();
    assert_eq!(all, vec![(2018, 1), (2018, 2), (2019, 1)]);
    assert_eq!(store.races(Some(2019)).unwrap().len(), 1);
}

#[test]
fn update_results_refreshes_winner() {
    let dir = tempdir().unwrap();
    let store = RaceStore::new(dir.path());
    store.upsert_races(vec![race(2018, 1, "Australia")]).unwrap();

    let updated = store
        .update_results(2018, 1, vec![finisher(1, "VET", 25.0), finisher(2, "HAM", 18.0)])
        .unwrap();
    assert_eq!(updated.winner.as_ref().map(|w| w.code.as_str()), Some("VET"));

    let stored = store.race(2018, 1).unwrap().unwrap();
    assert_eq!(stored, updated);
    assert_eq!(stored.name, "Australia");
}

#[test]
fn update_results_for_missing_race_fails() {
    let dir = tempdir().unwrap();
    let store = RaceStore::new(dir.path());
    store.upsert_races(vec![race(2018, 1, "Australia")]).unwrap();

    let err = store.update_results(2018, 7, Vec::new()).unwrap_err();
    assert!(matches!(err, StoreError::RaceNotFound { season: 2018, round: 7 }));
    assert_eq!(err.to_string(), "no race doc for season=2018 round=7");
    assert!(store.race(2018, 7).unwrap().is_none());
}
