//! End-to-end command tests against temporary data and store directories.

use std::fs;
use std::path::Path;

use f1_cli::commands::{
    ErgastSource, run_ergast, run_import, run_paste, run_race, run_races, run_standings,
    run_templates,
};
use f1_cli::config::F1Config;
use f1_cli::summary::{driver_table, results_table};
use f1_cli::types::RoundOutcome;
use f1_ingest::{RESULT_COLUMNS, read_result_rows};
use f1_standings::result_lines;
use tempfile::{TempDir, tempdir};

const SCHEDULE: &str = r#"{"MRData": {"RaceTable": {"Races": [
  {"season": "2018", "round": "1", "raceName": "Australian Grand Prix", "date": "2018-03-25",
   "Circuit": {"circuitName": "Albert Park Grand Prix Circuit",
               "Location": {"locality": "Melbourne", "country": "Australia"}}},
  {"season": "2018", "round": "2", "raceName": "Bahrain Grand Prix", "date": "2018-04-08",
   "Circuit": {"circuitName": "Bahrain International Circuit",
               "Location": {"locality": "Sakhir", "country": "Bahrain"}}}
]}}}"#;

const RESULTS: &str = r#"{"MRData": {"RaceTable": {"Races": [
  {"season": "2018", "round": "1", "Results": [
    {"position": "1", "points": "25", "grid": "3", "laps": "58", "status": "Finished",
     "Driver": {"code": "VET", "givenName": "Sebastian", "familyName": "Vettel"},
     "Constructor": {"name": "Ferrari"}, "Time": {"time": "1:29:33.283"}},
    {"position": "2", "points": "18", "grid": "1", "laps": "58", "status": "Finished",
     "Driver": {"code": "HAM", "givenName": "Lewis", "familyName": "Hamilton"},
     "Constructor": {"name": "Mercedes"}, "Time": {"time": "+5.036"}}
  ]}
]}}}"#;

fn workspace() -> (TempDir, F1Config) {
    let dir = tempdir().unwrap();
    let config = F1Config::default()
        .with_data_dir(Some(dir.path().join("data")))
        .with_store_dir(Some(dir.path().join("exports")));
    (dir, config)
}

fn export_fixture(dir: &Path, config: &F1Config) {
    let schedule = dir.join("raw-2018-schedule.json");
    let results = dir.join("raw-2018-results.json");
    fs::write(&schedule, SCHEDULE).unwrap();
    fs::write(&results, RESULTS).unwrap();
    let source = ErgastSource::Files {
        schedule,
        results: Some(results),
    };
    let export = run_ergast(config, 2018, &source).unwrap();
    assert_eq!(export.races, 2);
    assert_eq!(export.results, 2);
}

#[test]
fn templates_write_header_only_files() {
    let (_dir, config) = workspace();
    let result = run_templates(&config, 2019, 3).unwrap();
    assert_eq!(result.files.len(), 3);
    let text = fs::read_to_string(config.season_dir(2019).join("r3.csv")).unwrap();
    assert_eq!(text.trim_end(), RESULT_COLUMNS.join(","));
}

#[test]
fn ergast_export_then_csv_import() {
    let (dir, config) = workspace();
    export_fixture(dir.path(), &config);

    let season_dir = config.season_dir(2018);
    fs::create_dir_all(&season_dir).unwrap();
    fs::write(
        season_dir.join("r2.csv"),
        "position,code,driverName,team,grid,laps,time,status,points,flLap,flTime,flAvg\n\
         1,,Germany Sebastian Vettel,Ferrari,2,57,1:32:01.940,,25,,,\n\
         2,,Valtteri Bottas,Mercedes,4,57,+0.699s,,18,,,\n\
         Ret,,Kimi Räikkönen,Ferrari,2,35,,,0,,,\n",
    )
    .unwrap();
    fs::write(season_dir.join("R7.csv"), "position,code,driverName\n1,,Nobody\n").unwrap();
    fs::write(season_dir.join("r9.csv"), [0xff_u8, 0xfe, 0x00]).unwrap();
    fs::write(season_dir.join("notes.txt"), "ignored").unwrap();

    let import = run_import(&config, 2018).unwrap();
    let rounds: Vec<u32> = import.rounds.iter().map(|r| r.round).collect();
    assert_eq!(rounds, vec![2, 7, 9]);
    assert!(matches!(
        &import.rounds[0].outcome,
        RoundOutcome::Updated { results: 3, winner: Some(w) } if w == "VET"
    ));
    assert!(matches!(import.rounds[1].outcome, RoundOutcome::MissingRace));
    assert!(matches!(import.rounds[2].outcome, RoundOutcome::Failed(_)));
    assert!(import.has_errors);

    let bahrain = run_race(&config, 2018, 2).unwrap();
    assert_eq!(bahrain.location, "Sakhir, Bahrain");
    let lines = result_lines(&bahrain);
    let codes: Vec<&str> = lines.iter().map(|l| l.code.as_str()).collect();
    assert_eq!(codes, vec!["VET", "BOT", "RAI"]);
    assert_eq!(lines[2].time_or_status, "Retired");
    assert!(results_table(&lines).to_string().contains("Kimi Räikkönen"));

    let standings = run_standings(&config, 2018).unwrap();
    assert_eq!(standings.races.len(), 2);
    let leader = &standings.standings.drivers[0];
    assert_eq!((leader.code.as_str(), leader.points, leader.wins), ("VET", 50.0, 2));
    let teams: Vec<&str> = standings
        .standings
        .constructors
        .iter()
        .map(|c| c.team.as_str())
        .collect();
    assert_eq!(teams, vec!["Ferrari", "Mercedes"]);
    let rendered = driver_table(&standings.standings.drivers, standings.standings.driver_scale())
        .to_string();
    assert!(rendered.contains("VET Sebastian Vettel"));
}

#[test]
fn import_without_season_directory_fails() {
    let (_dir, config) = workspace();
    let err = run_import(&config, 2030).unwrap_err();
    assert!(format!("{err:#}").contains("directory not found"));
}

#[test]
fn paste_converts_rows_with_custom_codes() {
    let (_dir, mut config) = workspace();
    config
        .driver_codes
        .insert("Sergey Sirotkin".to_string(), "XXX".to_string());
    let season_dir = config.season_dir(2018);
    fs::create_dir_all(&season_dir).unwrap();
    fs::write(season_dir.join("driver-codes.json"), r#"{ "Sergey Sirotkin": "sir" }"#).unwrap();
    fs::write(
        season_dir.join("paste.tsv"),
        "1\t5\tSebastian Vettel\tFerrari\t58\t1:29:33.283\t3\t25\n\
         16\t35\tSergey Sirotkin\tWilliams-Mercedes\t57\t+1 Lap\t19\t\n\
         Ret\t27\tNico Hülkenberg\tRenault\t36\tEngine\t7\t\n\
         short\trow\n",
    )
    .unwrap();

    let result = run_paste(&config, 2018, 1, None).unwrap();
    assert_eq!(result.rows, 3);

    let rows = read_result_rows(&result.output).unwrap();
    let summary: Vec<(&str, &str, &str, &str)> = rows
        .iter()
        .map(|r| (r.position.as_str(), r.code.as_str(), r.time.as_str(), r.status.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("1", "VET", "1:29:33.283", "Finished"),
            ("16", "SIR", "", "+1 Lap"),
            ("Ret", "HUL", "", ""),
        ]
    );
}

#[test]
fn empty_paste_is_an_error() {
    let (_dir, config) = workspace();
    let season_dir = config.season_dir(2018);
    fs::create_dir_all(&season_dir).unwrap();
    fs::write(season_dir.join("paste.tsv"), "\n  \n").unwrap();
    let err = run_paste(&config, 2018, 1, None).unwrap_err();
    assert!(err.to_string().contains("no content"));
}

#[test]
fn race_listing_and_lookup() {
    let (dir, config) = workspace();
    assert!(run_races(&config, None).unwrap().is_empty());

    export_fixture(dir.path(), &config);
    let races = run_races(&config, Some(2018)).unwrap();
    let rounds: Vec<u32> = races.iter().map(|r| r.round).collect();
    assert_eq!(rounds, vec![1, 2]);
    assert!(run_races(&config, Some(2019)).unwrap().is_empty());
    assert_eq!(run_races(&config, None).unwrap().len(), 2);

    let err = run_race(&config, 2018, 5).unwrap_err();
    assert_eq!(err.to_string(), "race not found: season=2018 round=5");
}
