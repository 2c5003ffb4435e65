//! Standings and race-detail views.
//!
//! Nothing here is persisted: standings are folded from stored race
//! documents every time they are displayed.

pub mod aggregate;
pub mod detail;

pub use aggregate::{
    ConstructorStanding, DriverKey, DriverStanding, Standings, TeamKey, build_standings,
};
pub use detail::{ResultLine, fastest_lap_label, result_lines};
