//! Library side of the `f1data` command-line tool.
//!
//! Commands return plain result types; printing lives in [`summary`] so the
//! binary stays a thin dispatcher.

pub mod commands;
pub mod config;
pub mod logging;
pub mod summary;
pub mod types;
