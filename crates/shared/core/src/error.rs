use thiserror::Error;

/// Configuration errors, detected before a run starts
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("percent value {0} not in range [0.0, 1.0]")]
    FeeOutOfRange(f64),

    #[error("management fee {0} leaves no fund value; it must be below 1.0")]
    FeeConsumesFund(f64),

    #[error("clock drift {0} must be greater than -1.0")]
    DriftOutOfRange(f64),

    #[error("invalid positive_int value for {name}: {value}")]
    NotPositive { name: &'static str, value: i64 },

    #[error("mint period noise {noise} must be less than the mint period {period}")]
    NoiseNotBelowPeriod { noise: i64, period: i64 },

    #[error("invalid {name}: {value}")]
    InvalidConstant { name: &'static str, value: f64 },

    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
