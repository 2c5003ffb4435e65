//! Result status derivation.

use std::sync::LazyLock;

use regex::Regex;

/// Lap-deficit finishing text such as `+1 Lap` or `+2 Laps`.
static LAP_DEFICIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\+\d+\s*Lap").expect("Invalid lap deficit regex"));

/// Finishing time or gap as shown in race tables (`1:29:33.283`, `+5.036s`).
static RACE_TIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[\d:.]+s?$").expect("Invalid race time regex"));

pub const FINISHED: &str = "Finished";
pub const RETIRED: &str = "Retired";

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Returns true for lap-deficit text (`+1 Lap`).
pub fn is_lap_deficit(value: &str) -> bool {
    LAP_DEFICIT_REGEX.is_match(value.trim())
}

/// Returns true when a cell looks like a finishing time or gap.
pub fn is_race_time(value: &str) -> bool {
    RACE_TIME_REGEX.is_match(value.trim())
}

/// Status implied by non-numeric position text.
pub fn classify_position_text(text: &str) -> Option<&'static str> {
    let lower = text.trim().to_lowercase();
    if lower.is_empty() {
        return None;
    }
    if lower.starts_with("ret") {
        return Some(RETIRED);
    }
    match lower.as_str() {
        "dnf" => Some("DNF"),
        "dns" => Some("DNS"),
        "dsq" | "dq" => Some("DSQ"),
        _ => None,
    }
}

/// Derives a result's status.
///
/// Precedence: explicit status, classified position text, lap-deficit time
/// (kept verbatim), then `Finished` for any other time. Without any signal
/// the status is unknown.
pub fn derive_status(
    explicit: Option<&str>,
    position_text: Option<&str>,
    time: Option<&str>,
) -> Option<String> {
    if let Some(status) = non_empty(explicit) {
        return Some(status.to_string());
    }
    if let Some(status) = non_empty(position_text).and_then(classify_position_text) {
        return Some(status.to_string());
    }
    let time = non_empty(time)?;
    if is_lap_deficit(time) {
        return Some(time.to_string());
    }
    Some(FINISHED.to_string())
}

/// Status for a pasted `Time/Retired` cell.
///
/// Retirement keywords and lap deficits are kept verbatim, a time means the
/// driver finished. Any other text (`Engine`, `Collision`) is kept for
/// classified drivers and dropped for unclassified ones, whose status then
/// comes from the position text.
pub fn guess_paste_status(time_or_retired: &str, classified: bool) -> Option<String> {
    let text = time_or_retired.trim();
    if text.is_empty() {
        return None;
    }
    let lower = text.to_lowercase();
    let keywords = ["dnf", "retired", "disqualified", "dns", "lap"];
    if keywords.iter().any(|k| lower.contains(k)) {
        return Some(text.to_string());
    }
    if is_race_time(text) {
        return Some(FINISHED.to_string());
    }
    classified.then(|| text.to_string())
}
