use thiserror::Error;

/// Errors produced by carousel configuration validation.
///
/// The engine never surfaces these as panics; an invalid configuration
/// degrades to an inert carousel with navigation disabled.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("visible count must be at least 1")]
    ZeroVisibleCount,
    #[error("start index {start} out of range for {total} items")]
    StartIndexOutOfRange { start: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
