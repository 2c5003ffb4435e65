//! F1 data ingestion utilities.
//!
//! This crate reads the raw sources the import pipeline consumes and hands
//! them on as explicit, typed records. Nothing here interprets the values;
//! normalization into canonical results happens in `f1-normalization`.
//!
//! # Sources
//!
//! - **Result CSVs**: `r<N>.csv` files with the fixed result header
//! - **Ergast JSON**: saved API payloads or live HTTP responses
//! - **Pasted tables**: tab-separated rows copied from a Wikipedia race table
//! - **Driver codes**: `driver-codes.json` name to code overrides
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use f1_ingest::{list_round_files, read_result_rows};
//!
//! for round_file in list_round_files(Path::new("data/2018"))? {
//!     let rows = read_result_rows(&round_file.path)?;
//! }
//! ```

mod discovery;
mod driver_codes;
mod error;
pub mod ergast;
mod paste;
mod result_csv;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Rows ===
pub use result_csv::{
    RESULT_COLUMNS, ResultRow, clean_driver_name, parse_result_rows, read_result_rows,
    write_result_rows, write_template,
};

// === Round Discovery ===
pub use discovery::{RoundFile, list_round_files, round_file_name};

// === Driver Code Overrides ===
pub use driver_codes::{DRIVER_CODES_FILE, load_driver_codes, parse_driver_codes};

// === Ergast JSON ===
pub use ergast::{ErgastClient, ErgastResponse, read_ergast_file};

// === Pasted Tables ===
pub use paste::{PASTE_FILE, PasteRow, parse_paste, read_paste_file};
