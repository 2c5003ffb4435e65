//! Canonical F1 data model.
//!
//! Every import source is normalized into these types before it is
//! persisted or aggregated. The serde shape matches the stored race
//! documents (`camelCase` keys, `fastestLap`, `averageSpeed`).

pub mod driver;
pub mod error;
pub mod race;
pub mod result;

pub use driver::DriverRef;
pub use error::{ModelError, Result};
pub use race::{Race, RaceKey, parse_race_date};
pub use result::{FastestLap, RaceResult, cmp_by_position};
