//! Core library for the `svctime` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI argument
//! types, configuration parsing, event log ingestion, the per-second
//! service-time series and the statistics computed over it. The primary
//! user-facing interface is the `svctime` command-line report; library APIs
//! may evolve as the CLI grows.
pub mod args;
pub mod config;
pub mod error;
pub mod input;
pub mod series;
pub mod stats;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;
