//! Configuration management for fitcoach.
//!
//! This module handles loading and saving configuration from the fitcoach home directory.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, PlayerConfig, ProgressConfig};
