//! Inlezen en wegschrijven van configuratiedocumenten.

pub mod config_json;

pub use config_json::{CONFIG_VERSION, CalibrationConfig, ConfigError, ConfigResult, parse_str};
