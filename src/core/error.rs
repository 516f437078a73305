//! Error handling and error types for the conditional sampler.
//!
//! Every fallible operation in the crate returns [`Result`], whose error type
//! is [`SamplerError`]. Errors are raised at the point of detection and are
//! never retried: they describe inconsistent layouts, malformed encodings or
//! requests rather than transient failures.

use std::io;
use thiserror::Error;

/// Main error type for the sampler library.
#[derive(Error, Debug)]
pub enum SamplerError {
    /// The column layout does not cover the encoded matrix exactly.
    #[error("Layout mismatch: layout spans {layout_width} columns, matrix has {matrix_width}")]
    LayoutMismatch {
        /// Sum of all span widths in the layout
        layout_width: usize,
        /// Column count of the encoded matrix
        matrix_width: usize,
    },

    /// A requested (discrete column, category) pair has no training rows.
    #[error("No training rows for discrete column {discrete_column}, category {category}")]
    EmptyCategory {
        /// Discrete column ordinal
        discrete_column: usize,
        /// Category ordinal within the column
        category: usize,
    },

    /// A row of a discrete block is not a single one-hot entry (strict mode).
    #[error("Discrete column {discrete_column}, row {row}: expected exactly one active category, found {active}")]
    InvalidEncoding {
        /// Discrete column ordinal
        discrete_column: usize,
        /// Row index in the encoded matrix
        row: usize,
        /// Number of non-zero entries found in the block
        active: usize,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the problem
        message: String,
    },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}, {reason}")]
    InvalidParameter {
        /// Parameter name
        parameter: String,
        /// Offending value
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Dimension mismatch errors
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected shape or length
        expected: String,
        /// Shape or length actually supplied
        actual: String,
    },

    /// Out of bounds access
    #[error("Index out of bounds: index {index}, length {length}")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Length of the indexed collection
        length: usize,
    },

    /// File I/O errors
    #[error("I/O error: {source}")]
    IO {
        /// Underlying I/O error
        #[from]
        source: io::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {source}")]
    Json {
        /// Underlying serde_json error
        #[from]
        source: serde_json::Error,
    },

    /// TOML deserialization errors
    #[error("TOML error: {source}")]
    Toml {
        /// Underlying toml error
        #[from]
        source: toml::de::Error,
    },
}

/// Type alias for Results using SamplerError
pub type Result<T> = std::result::Result<T, SamplerError>;

impl SamplerError {
    /// Create a layout mismatch error
    pub fn layout_mismatch(layout_width: usize, matrix_width: usize) -> Self {
        SamplerError::LayoutMismatch {
            layout_width,
            matrix_width,
        }
    }

    /// Create an empty category error
    pub fn empty_category(discrete_column: usize, category: usize) -> Self {
        SamplerError::EmptyCategory {
            discrete_column,
            category,
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        SamplerError::Config {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter<P, V, R>(parameter: P, value: V, reason: R) -> Self
    where
        P: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        SamplerError::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch<E, A>(expected: E, actual: A) -> Self
    where
        E: Into<String>,
        A: Into<String>,
    {
        SamplerError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an index out of bounds error
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        SamplerError::IndexOutOfBounds { index, length }
    }

    /// Check if this error is recoverable.
    ///
    /// Sampler errors are logic or data errors; only I/O on configuration
    /// files may succeed when repeated.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SamplerError::IO { .. })
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            SamplerError::LayoutMismatch { .. } => "layout_mismatch",
            SamplerError::EmptyCategory { .. } => "empty_category",
            SamplerError::InvalidEncoding { .. } => "invalid_encoding",
            SamplerError::Config { .. } => "config",
            SamplerError::InvalidParameter { .. } => "invalid_parameter",
            SamplerError::DimensionMismatch { .. } => "dimension_mismatch",
            SamplerError::IndexOutOfBounds { .. } => "index_out_of_bounds",
            SamplerError::IO { .. } => "io",
            SamplerError::Json { .. } => "json",
            SamplerError::Toml { .. } => "toml",
        }
    }
}

/// Convenience macros for error creation
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::core::error::SamplerError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::core::error::SamplerError::config(format!($fmt, $($arg)*))
    };
}

/// Return early with the given error when a condition does not hold.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err.into());
        }
    };
}
