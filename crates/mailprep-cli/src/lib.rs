//! Library side of the `mailprep` command-line tool.
//!
//! Holds everything the binary needs that is worth testing without a
//! terminal: settings, logging setup, and run orchestration.

pub mod config;
pub mod logging;
pub mod run;
