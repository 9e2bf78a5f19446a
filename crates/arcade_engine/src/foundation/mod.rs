//! Foundation utilities shared by the engine and games built on it
//!
//! - `math`: 2D vector alias and angle helpers
//! - `time`: wall-clock frame timer and delta-driven interval timer
//! - `logging`: `env_logger` setup and re-exported `log` macros

pub mod math;
pub mod time;
pub mod logging;
