//! Data models: extracted records and pipeline configuration.

pub mod config;
pub mod record;

pub use config::EvinxConfig;
pub use record::{ChargingRecord, RECORD_COLUMNS};
