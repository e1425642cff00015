//! Testing infrastructure for civlog integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `fixtures`: SACI export generation (delimited and markup, Latin encoded)
//! - `TestWorld`: isolated temp directory + CLI invocation
//! - `assertions`: checks over the CLI's JSON output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::{ExportBuilder, ExportRow};
pub use world::{CliResult, TestWorld};
