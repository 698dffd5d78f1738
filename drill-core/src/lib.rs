//! Core library for the `drill` CLI.
//!
//! This crate defines:
//! - A mock weather source and the lookup that parses its payloads
//! - Summary statistics over a forecast (mean, precipitation days, trend)
//! - Text scanning for the `wc`-style counter
//! - The receipt and square-root exercises
//! - Configuration handling
//!
//! It is used by `drill-cli`, but can also be reused by other binaries.

pub mod config;
pub mod error;
pub mod model;
pub mod receipt;
pub mod source;
pub mod sqrt;
pub mod summary;
pub mod text;

pub use config::Config;
pub use error::DrillError;
pub use model::{DayReading, Lookup, WeatherRecord};
pub use source::{SourceId, WeatherSource};
pub use summary::{Trend, WeatherSummary};
pub use text::{CountSelection, TextStats};
