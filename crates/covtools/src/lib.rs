// Covtools CLI Library

//! Command-line layer for the covtools utilities.
//!
//! Each module holds the argument surface and runner for one binary:
//! [`cover`] for `reqcover`, [`killgen`] for `killgen`, and [`logplot`]
//! for `logplot`. The runners take a writer (or return the written paths)
//! so integration tests can exercise them without spawning processes.

pub mod cover;
pub mod killgen;
pub mod logplot;
