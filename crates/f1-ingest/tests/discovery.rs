//! Tests for round file discovery.

use std::fs;
use std::path::Path;

use f1_ingest::{IngestError, list_round_files, write_template};

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), "position,code,driverName\n").expect("write file");
}

#[test]
fn lists_round_files_in_numeric_order() {
    let dir = tempfile::tempdir().expect("temp dir");
    touch(dir.path(), "r10.csv");
    touch(dir.path(), "r2.csv");
    touch(dir.path(), "R1.CSV");
    touch(dir.path(), "paste.tsv");
    touch(dir.path(), "driver-codes.json");
    touch(dir.path(), "notes.csv");
    fs::create_dir(dir.path().join("r3.csv")).expect("create dir");

    let files = list_round_files(dir.path()).expect("list rounds");
    let rounds: Vec<u32> = files.iter().map(|f| f.round).collect();
    assert_eq!(rounds, vec![1, 2, 10]);
    assert!(files[2].path.ends_with("r10.csv"));
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("2031");
    let result = list_round_files(&missing);
    assert!(matches!(result, Err(IngestError::DirectoryNotFound { .. })));
}

#[test]
fn templates_are_discoverable() {
    let dir = tempfile::tempdir().expect("temp dir");
    let season_dir = dir.path().join("2019");
    for round in 1..=3 {
        write_template(&season_dir.join(format!("r{round}.csv"))).expect("write template");
    }
    let files = list_round_files(&season_dir).expect("list rounds");
    assert_eq!(files.len(), 3);
}
