/*!
 * Error types for the edlsubcap application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Outcomes of a conversion that produce no export.
///
/// Neither is fatal: callers present a notice instead of an export file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The scanner found no locator blocks in the source text
    #[error("No matching * LOC: comments found")]
    NoLocatorsFound,

    /// Every block was excluded by the color selection
    #[error("All {total} locator(s) were excluded by the color selection")]
    AllBlocksFiltered {
        /// Number of blocks before filtering
        total: usize,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the conversion pipeline
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
