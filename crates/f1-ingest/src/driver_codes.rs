//! Custom driver code overrides.
//!
//! A season directory may hold `driver-codes.json`, a flat JSON object
//! mapping a driver's display name to the 3-letter code to use for them.
//! Keys are kept as written; normalization folds them.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{IngestError, Result};

/// File name of the override map inside a season directory.
pub const DRIVER_CODES_FILE: &str = "driver-codes.json";

/// Parses an override document. Codes are trimmed and uppercased.
pub fn parse_driver_codes(text: &str, path: &Path) -> Result<BTreeMap<String, String>> {
    let raw: BTreeMap<String, serde_json::Value> =
        serde_json::from_str(text).map_err(|e| IngestError::Json {
            path: path.to_path_buf(),
            source: e,
        })?;

    let codes = raw
        .into_iter()
        .map(|(name, value)| {
            let code = match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            (name, code.trim().to_uppercase())
        })
        .collect();
    Ok(codes)
}

/// Loads the override map. A missing file yields an empty map.
pub fn load_driver_codes(path: &Path) -> Result<BTreeMap<String, String>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no driver code overrides");
            return Ok(BTreeMap::new());
        }
        Err(e) => return Err(IngestError::read(path, e)),
    };
    let codes = parse_driver_codes(&text, path)?;
    tracing::debug!(path = %path.display(), count = codes.len(), "loaded driver code overrides");
    Ok(codes)
}
