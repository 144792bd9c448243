#![forbid(unsafe_code)]

//! Calorie-burn estimation core.
//!
//! This crate provides:
//! - Reference tables (per-exercise kcal/min, treadmill MET samples)
//! - Nearest-speed MET lookup and the treadmill energy model
//! - Rate resolution per profile and exercise
//! - Cumulative session projection
//! - Control-state handling, output sinks and configuration

pub mod types;
pub mod error;
pub mod catalog;
pub mod met;
pub mod treadmill;
pub mod input;
pub mod resolver;
pub mod projection;
pub mod controls;
pub mod sink;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_table, get_default_table};
pub use met::{lookup_met, TREADMILL_MET_TABLE};
pub use treadmill::treadmill_rate;
pub use resolver::{resolve_rate, resolve_rate_default};
pub use projection::project;
pub use controls::{ControlState, Readout};
pub use sink::{CsvSeriesSink, JsonSeriesSink, SeriesSink};
pub use config::Config;
