//! Error types for the runner crate

use cfm_core::ConfigError;
use thiserror::Error;

/// Errors that stop a run before its first tick
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
