use thiserror::Error;

/// Errors returned by grid construction, settings loading and the cascade driver.
///
/// A `trace` whose start bin lies after its end bin is not represented here:
/// that is a logic defect in a process model and panics instead.
#[derive(Debug, Error)]
pub enum ShowerError {
    #[error("partition of {requested} shares exceeds capacity {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },

    #[error("generation {generation} exceeds limit {limit}")]
    GenerationLimit { generation: usize, limit: usize },

    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShowerError>;
