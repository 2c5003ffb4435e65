//! Race tables pasted from Wikipedia.
//!
//! The paste holds data rows only, tab separated, in the column order of the
//! "Race result" table: `Pos | No | Driver | Constructor | Laps |
//! Time/Retired | Grid | Pts`.

use std::fs;
use std::path::Path;

use crate::error::{IngestError, Result};

/// File name of the paste buffer inside a season directory.
pub const PASTE_FILE: &str = "paste.tsv";

/// Number of columns a pasted race-result row must have.
const PASTE_COLUMNS: usize = 8;

/// One pasted race-result row, cells trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasteRow {
    pub position: String,
    pub number: String,
    pub driver_name: String,
    pub team: String,
    pub laps: String,
    pub time_or_retired: String,
    pub grid: String,
    pub points: String,
}

impl PasteRow {
    fn from_cells(cells: &[&str]) -> Self {
        Self {
            position: cells[0].to_string(),
            number: cells[1].to_string(),
            driver_name: cells[2].to_string(),
            team: cells[3].to_string(),
            laps: cells[4].to_string(),
            time_or_retired: cells[5].to_string(),
            grid: cells[6].to_string(),
            points: cells[7].to_string(),
        }
    }
}

/// Parses pasted rows, skipping blank lines and rows with too few columns.
pub fn parse_paste(text: &str) -> Vec<PasteRow> {
    let mut rows = Vec::new();
    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        let cells: Vec<&str> = line.split('\t').map(str::trim).collect();
        if cells.len() < PASTE_COLUMNS {
            tracing::debug!(columns = cells.len(), "skipping short pasted row");
            continue;
        }
        rows.push(PasteRow::from_cells(&cells));
    }
    rows
}

/// Reads the paste buffer. A file without any non-blank line is an error.
pub fn read_paste_file(path: &Path) -> Result<Vec<PasteRow>> {
    let text = fs::read_to_string(path).map_err(|e| IngestError::read(path, e))?;
    if text.lines().all(|line| line.trim().is_empty()) {
        return Err(IngestError::EmptyPaste {
            path: path.to_path_buf(),
        });
    }
    Ok(parse_paste(&text))
}
