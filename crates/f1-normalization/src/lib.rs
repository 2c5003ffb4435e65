//! Normalization of raw F1 result sources.
//!
//! Turns the typed source records from `f1-ingest` into canonical
//! [`f1_model::RaceResult`] lists. Field-level defects never abort a race:
//! unparseable numbers become absent (points become zero) and entries
//! without a driver name are dropped.
//!
//! # Example
//!
//! ```ignore
//! use f1_normalization::{DriverCodes, Normalizer, RawResult};
//!
//! let normalizer = Normalizer::new(DriverCodes::builtin());
//! let rows = f1_ingest::read_result_rows(path)?;
//! let results = normalizer.normalize_race(rows.iter().map(RawResult::from));
//! ```

pub mod driver_code;
pub mod numeric;
pub mod paste;
pub mod race;
pub mod result;
pub mod status;

pub use driver_code::{DriverCodes, fallback_code, normalize_driver_name};
pub use numeric::{parse_count, parse_number, parse_points, parse_position};
pub use paste::{paste_row_to_result_row, paste_to_result_rows};
pub use race::Normalizer;
pub use result::RawResult;
pub use status::{classify_position_text, derive_status, guess_paste_status, is_lap_deficit};
