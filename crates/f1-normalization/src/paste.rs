//! Conversion of pasted race tables into round CSV rows.

use f1_ingest::{PasteRow, ResultRow};

use crate::driver_code::DriverCodes;
use crate::numeric::{parse_count, parse_position};
use crate::status::{guess_paste_status, is_race_time};

fn count_text(value: &str) -> String {
    parse_count(value).map(|n| n.to_string()).unwrap_or_default()
}

/// Converts one pasted row into a round CSV row.
///
/// The position text is kept as pasted so that `Ret`/`DNS`/`DSQ` still drive
/// status derivation on import.
pub fn paste_row_to_result_row(row: &PasteRow, codes: &DriverCodes) -> ResultRow {
    let classified = parse_position(&row.position).is_some();
    let time = if is_race_time(&row.time_or_retired) {
        row.time_or_retired.clone()
    } else {
        String::new()
    };

    ResultRow {
        position: row.position.clone(),
        code: codes.derive(&row.driver_name, None),
        driver_name: row.driver_name.clone(),
        team: row.team.clone(),
        grid: count_text(&row.grid),
        laps: count_text(&row.laps),
        time,
        status: guess_paste_status(&row.time_or_retired, classified).unwrap_or_default(),
        points: row.points.clone(),
        fl_lap: String::new(),
        fl_time: String::new(),
        fl_avg: String::new(),
    }
}

/// Converts every pasted row.
pub fn paste_to_result_rows(rows: &[PasteRow], codes: &DriverCodes) -> Vec<ResultRow> {
    rows.iter()
        .map(|row| paste_row_to_result_row(row, codes))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paste(cells: [&str; 8]) -> PasteRow {
        PasteRow {
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

    #[test]
    fn test_paste_winner() {
        let codes = DriverCodes::builtin();
        let row = paste_row_to_result_row(
            &paste(["1", "5", "Sebastian Vettel", "Ferrari", "58", "1:29:33.283", "3", "25"]),
            &codes,
        );
        assert_eq!(row.code, "VET");
        assert_eq!(row.time, "1:29:33.283");
        assert_eq!(row.status, "Finished");
        assert_eq!(row.grid, "3");
        assert_eq!(row.laps, "58");
    }

    #[test]
    fn test_paste_retirement_and_lapped() {
        let codes = DriverCodes::builtin().with_custom([("Charles Leclerc", "LEC")]);
        let retired = paste_row_to_result_row(
            &paste(["Ret", "16", "Charles Leclerc", "Sauber-Ferrari", "27", "Brakes", "PL", ""]),
            &codes,
        );
        assert_eq!(retired.position, "Ret");
        assert_eq!(retired.time, "");
        assert_eq!(retired.status, "");
        assert_eq!(retired.grid, "");

        let lapped = paste_row_to_result_row(
            &paste(["14", "10", "Pierre Gasly", "Toro Rosso-Honda", "57", "+1 Lap", "20", ""]),
            &codes,
        );
        assert_eq!(lapped.status, "+1 Lap");
        assert_eq!(lapped.time, "");
    }

    #[test]
    fn test_paste_unknown_driver_uses_fallback() {
        let row = paste_row_to_result_row(
            &paste(["17", "9", "Jules Bianchi", "Marussia", "", "", "", ""]),
            &DriverCodes::builtin(),
        );
        assert_eq!(row.code, "BIA");
        assert_eq!(row.status, "");
    }
}
