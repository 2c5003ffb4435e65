//! Round result file discovery.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{IngestError, Result};

/// Round files are named `r<round>.csv`, case-insensitively.
static ROUND_FILE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^r(\d+)\.csv$").expect("Invalid round file regex"));

/// A discovered round result file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundFile {
    /// Round number parsed from the filename.
    pub round: u32,
    /// Path to the CSV file.
    pub path: PathBuf,
}

/// File name of the CSV holding results for `round`.
pub fn round_file_name(round: u32) -> String {
    format!("r{round}.csv")
}

/// Parses the round number out of a round file name.
fn match_round(file_name: &str) -> Option<u32> {
    ROUND_FILE_REGEX
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Lists all round result files in a season directory.
///
/// Returns files sorted by round number. Other files are ignored.
pub fn list_round_files(dir: &Path) -> Result<Vec<RoundFile>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(round) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(match_round)
        else {
            continue;
        };

        files.push(RoundFile { round, path });
    }

    files.sort_by_key(|file| file.round);
    Ok(files)
}
