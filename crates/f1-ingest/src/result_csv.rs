//! Result CSV reading and writing.
//!
//! Round files share one fixed header (see [`RESULT_COLUMNS`]). Every cell is
//! kept as text; numeric coercion is left to normalization so that a bad
//! cell never rejects the whole file.

use std::fs;
use std::path::Path;

use ::csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{IngestError, Result};

/// Header of every round result CSV, in column order.
pub const RESULT_COLUMNS: [&str; 12] = [
    "position",
    "code",
    "driverName",
    "team",
    "grid",
    "laps",
    "time",
    "status",
    "points",
    "flLap",
    "flTime",
    "flAvg",
];

/// Country names that appear in front of the driver when a Wikipedia table
/// is copied with its flag column.
const NATIONALITY_PREFIXES: &[&str] = &[
    "United Kingdom",
    "Great Britain",
    "United States",
    "New Zealand",
    "Netherlands",
    "Argentina",
    "Australia",
    "Austria",
    "Belgium",
    "Brazil",
    "Canada",
    "China",
    "Denmark",
    "Finland",
    "France",
    "Germany",
    "Indonesia",
    "Italy",
    "Japan",
    "Mexico",
    "Monaco",
    "Poland",
    "Russia",
    "Spain",
    "Sweden",
    "Switzerland",
    "Thailand",
];

/// One row of a round result CSV.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub driver_name: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub grid: String,
    #[serde(default)]
    pub laps: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub points: String,
    #[serde(default)]
    pub fl_lap: String,
    #[serde(default)]
    pub fl_time: String,
    #[serde(default)]
    pub fl_avg: String,
}

/// Removes a leading country name left over from a copied flag column.
///
/// `"Germany Sebastian Vettel"` becomes `"Sebastian Vettel"`. Names without a
/// known country prefix are only trimmed.
pub fn clean_driver_name(raw: &str) -> String {
    let trimmed = raw.trim();
    for country in NATIONALITY_PREFIXES {
        let Some(rest) = trimmed.strip_prefix(country) else {
            continue;
        };
        if rest.starts_with(char::is_whitespace) {
            let rest = rest.trim_start();
            if rest.starts_with(|c: char| c.is_uppercase()) {
                return rest.to_string();
            }
        }
    }
    trimmed.to_string()
}

/// Parses result rows from CSV text.
///
/// `path` is only used for error context.
pub fn parse_result_rows(text: &str, path: &Path) -> Result<Vec<ResultRow>> {
    let csv_error = |source: ::csv::Error| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    // Header cells may carry a UTF-8 BOM
    let headers: StringRecord = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let mut record = record.map_err(csv_error)?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        // Short rows deserialize with the missing cells empty
        while record.len() < headers.len() {
            record.push_field("");
        }
        let mut row: ResultRow = record.deserialize(Some(&headers)).map_err(csv_error)?;
        row.driver_name = clean_driver_name(&row.driver_name);
        rows.push(row);
    }

    tracing::debug!(path = %path.display(), rows = rows.len(), "parsed result rows");
    Ok(rows)
}

/// Reads result rows from a round CSV file.
pub fn read_result_rows(path: &Path) -> Result<Vec<ResultRow>> {
    let text = fs::read_to_string(path).map_err(|e| IngestError::read(path, e))?;
    parse_result_rows(&text, path)
}

/// Writes result rows under the standard header, creating parent directories.
pub fn write_result_rows(path: &Path, rows: &[ResultRow]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| IngestError::FileWrite {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let csv_error = |source: ::csv::Error| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_error)?;
    writer.write_record(RESULT_COLUMNS).map_err(csv_error)?;
    for row in rows {
        writer.serialize(row).map_err(csv_error)?;
    }
    writer.flush().map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), rows = rows.len(), "wrote result rows");
    Ok(())
}

/// Writes a header-only round CSV.
pub fn write_template(path: &Path) -> Result<()> {
    write_result_rows(path, &[])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Vec<ResultRow> {
        parse_result_rows(text, Path::new("r1.csv")).unwrap()
    }

    #[test]
    fn test_parse_full_row() {
        let rows = parse(
            "position,code,driverName,team,grid,laps,time,status,points,flLap,flTime,flAvg\n\
             1,VET,Sebastian Vettel,Ferrari,3,58,1:29:33.283,Finished,25,54,1:26.444,220.8\n",
        );
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.position, "1");
        assert_eq!(row.driver_name, "Sebastian Vettel");
        assert_eq!(row.fl_time, "1:26.444");
        assert_eq!(row.fl_avg, "220.8");
    }

    #[test]
    fn test_parse_strips_bom_and_blank_lines() {
        let rows = parse("\u{feff}position,driverName,team\n\n1, Lewis Hamilton ,Mercedes\n,,\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].position, "1");
        assert_eq!(rows[0].driver_name, "Lewis Hamilton");
        assert_eq!(rows[0].points, "");
    }

    #[test]
    fn test_parse_short_rows_and_quotes() {
        let rows = parse("position,driverName,team,time\nRet,\"Sainz, Carlos\"\n");
        assert_eq!(rows[0].position, "Ret");
        assert_eq!(rows[0].driver_name, "Sainz, Carlos");
        assert_eq!(rows[0].team, "");
        assert_eq!(rows[0].time, "");
    }

    #[test]
    fn test_parse_header_only() {
        assert!(parse("position,code,driverName\n").is_empty());
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_clean_driver_name() {
        assert_eq!(clean_driver_name("Germany Sebastian Vettel"), "Sebastian Vettel");
        assert_eq!(clean_driver_name("United Kingdom Lewis Hamilton"), "Lewis Hamilton");
        assert_eq!(clean_driver_name(" Lewis Hamilton "), "Lewis Hamilton");
        assert_eq!(clean_driver_name("Carlos Sainz Jr."), "Carlos Sainz Jr.");
        assert_eq!(clean_driver_name("Monaco"), "Monaco");
    }
}
