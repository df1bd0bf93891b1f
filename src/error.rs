//! Error types for sliding window operations
//!
//! Every error here is a contract violation by the caller or a bad
//! configuration. None of them are transient, so nothing is retried.

/// Main error type for window operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WindowError {
    /// Window constructed with a capacity of zero
    #[error("Invalid window capacity: {capacity} (must be at least 1)")]
    InvalidCapacity { capacity: usize },
    /// Evict, maximum or average requested from a window holding nothing
    #[error("Window is empty")]
    EmptyWindow,
    /// Push attempted on a window that is already at capacity
    #[error("Window capacity {capacity} exceeded; evict before pushing")]
    CapacityOverflow { capacity: usize },
    /// NaN or infinite float
    #[error("Non-finite value was rejected")]
    InvalidValue,
    /// Runner or configuration without any window
    #[error("At least one window capacity is required")]
    NoCapacities,
    /// Running sum would leave the range of its accumulator
    #[error("Window sum overflowed")]
    SumOverflow,
    /// Malformed configuration document
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for WindowError {
    fn from(err: serde_json::Error) -> Self {
        WindowError::Config(err.to_string())
    }
}

/// Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;
