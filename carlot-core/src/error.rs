//! Core error types for Carlot.

use thiserror::Error;

/// Core error type for Carlot operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// No brand family matches the given name.
    #[error("Unknown brand: {0}")]
    UnknownBrand(String),

    /// A factory or descriptor was assembled incompletely.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
