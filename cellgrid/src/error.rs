//! Error types for grid construction, configuration and rasterization.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid grid dimensions {width}x{height}: both must be non-zero")]
    InvalidDimension { width: u32, height: u32 },

    #[error("grid needs {expected} cells but {actual} were supplied")]
    CellCountMismatch { expected: usize, actual: usize },

    #[error("initial live cell percentage must be within 0..=100, got {0}")]
    InvalidPercentage(u8),

    #[error("cannot seed {requested} live cells into a grid of {capacity} cells")]
    InvalidLiveCount { requested: usize, capacity: usize },

    #[error("mutation probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("max iteration must be at least 1")]
    InvalidIterationLimit,

    #[error("invalid {axis} bounds: min {min} must be finite and less than max {max}")]
    InvalidBounds { axis: &'static str, min: f64, max: f64 },

    #[error("pixel buffer holds {actual} bytes but the grid needs exactly {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
