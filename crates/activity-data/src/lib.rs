//! Data layer for the activity chart generator.
//!
//! Responsible for discovering and parsing the exported `raw_*.json`
//! documents, aggregating commit and pull-request records into activity
//! statistics, projecting them into chart series and emitting the
//! chart-data artifact.

pub mod aggregator;
pub mod analysis;
pub mod emitter;
pub mod projection;
pub mod reader;

pub use activity_core as core;
