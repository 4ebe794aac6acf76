use thiserror::Error;

/// Invalid or unreadable optimizer configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
}

/// Reasons an optimization request is refused.
#[derive(Error, Debug)]
pub enum OptimizeError {
    #[error("At least 2 stops with valid coordinates are required, found {found}")]
    InsufficientStops { found: usize },
    #[error("Stop {stop_id} has a non-finite coordinate")]
    InvalidCoordinate { stop_id: String },
    #[error("Duplicate stop id: {0}")]
    DuplicateStop(String),
    #[error("Unknown stop id: {0}")]
    UnknownStop(String),
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
