//! Core domain types for the activity chart generator.
//!
//! Holds the serde models for the exported repository-activity records,
//! timestamp parsing, the error type shared by all crates, and the CLI
//! settings.

pub mod error;
pub mod models;
pub mod settings;
pub mod time_utils;

pub use error::{ActivityError, Result};
