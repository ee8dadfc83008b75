/*!
 * Error types for the subfix application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 *
 * Per-line parse problems inside a codec are not errors in this sense: they are
 * counted in a `LoadReport` and never escape the load call.
 */

use thiserror::Error;

/// Errors raised while parsing a single time code
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeCodeError {
    /// The time code did not have the expected number of fields
    #[error("Invalid time code field count: {0}")]
    FieldCount(String),

    /// A field was not a number
    #[error("Invalid time code field: {0}")]
    InvalidField(String),
}

/// Errors that can occur when reading or writing a subtitle format
#[derive(Error, Debug)]
pub enum FormatError {
    /// No registered format recognized the input
    #[error("Unknown subtitle format: {0}")]
    UnknownFormat(String),

    /// The input was recognized but produced no paragraphs
    #[error("No paragraphs could be read from: {0}")]
    NoParagraphs(String),

    /// A whole-file parse failure
    #[error("Parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// What went wrong
        message: String,
    },

    /// Error with a time code
    #[error("Time code error: {0}")]
    TimeCode(#[from] TimeCodeError),
}

/// Errors that can occur while configuring or driving the fix engine
#[derive(Error, Debug)]
pub enum FixError {
    /// A rule name did not match any known rule
    #[error("Unknown fix rule: {0}")]
    UnknownRule(String),

    /// A selection referred to a record that does not exist
    #[error("Invalid fix selection: {0}")]
    InvalidSelection(String),

    /// A structural edit referred to a paragraph that does not exist
    #[error("Paragraph index out of range: {0}")]
    ParagraphOutOfRange(usize),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error in the configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from a subtitle format
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// Error from the fix engine
    #[error("Fix error: {0}")]
    Fix(#[from] FixError),

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
