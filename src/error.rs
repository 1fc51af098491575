//! Typed errors raised by the ranking and geometry core.

use thiserror::Error;

/// Invalid input handed to the core by its caller. Rejected synchronously, never defaulted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unknown sort key '{0}' (expected one of: rank, price, change, volume)")]
    UnknownSortKey(String),

    #[error("unknown sort direction '{0}' (expected asc or desc)")]
    UnknownSortDirection(String),

    #[error("invalid plot dimensions: width {width}, height {height}, padding {padding}")]
    InvalidDimensions { width: f64, height: f64, padding: f64 },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
