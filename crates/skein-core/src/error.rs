//! Error types for chart construction and component builders.

use std::error::Error;
use std::fmt;

/// Errors from building or decoding a stitch chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChartError {
    /// Width or height is zero.
    EmptyChart,
    /// The cell buffer length does not equal `width * height`.
    SizeMismatch {
        /// `width * height`.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
    /// A pixel code outside the op table.
    UnknownCode {
        /// The offending code.
        code: u8,
        /// Row-major cell index of the code.
        index: usize,
    },
    /// A chart-text character that names no operation.
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Chart row, counted from the bottom.
        row: usize,
        /// Column within the row.
        column: usize,
    },
    /// A dimension too large for contact-grid coordinates.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// Requested value.
        value: u32,
        /// Largest accepted value.
        max: u32,
    },
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyChart => write!(f, "chart must have at least one row and one column"),
            Self::SizeMismatch { expected, actual } => {
                write!(f, "chart needs {expected} cells, got {actual}")
            }
            Self::UnknownCode { code, index } => {
                write!(f, "unknown stitch code {code} at cell {index}")
            }
            Self::UnknownSymbol {
                symbol,
                row,
                column,
            } => write!(
                f,
                "unknown stitch symbol '{symbol}' at row {row}, column {column}"
            ),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "chart {name} {value} exceeds maximum {max}")
            }
        }
    }
}

impl Error for ChartError {}

/// Errors from validating a builder's settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// A step limit was set to zero.
    ZeroLimit {
        /// Name of the setting.
        name: &'static str,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLimit { name } => write!(f, "{name} must be >= 1"),
        }
    }
}

impl Error for BuildError {}
