//! Race document store.
//!
//! One pretty-printed JSON array per season (`<season>-races.json`) under a
//! store directory. Races are identified by `(season, round)`; writing a
//! race that already exists replaces it.

mod error;
mod store;

pub use error::{Result, StoreError};
pub use store::{RaceStore, UpsertSummary, season_file_name};
