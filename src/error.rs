//! Error-handling module for the crate

use std::fmt::Display;

use rmp::encode::ValueWriteError;
use thiserror::Error;

/// Error-collection for all recoverable failures of column operations.
///
/// None of these conditions is fatal; a failed operation leaves the
/// column it was invoked on unchanged.
#[allow(variant_size_differences)]
#[derive(Error, Debug)]
pub enum ColumnError {
    /// Index outside the valid range `0..len()` of a column,
    /// raised by `get`, `update`, `remove` and value serialization.
    #[error("index {index} is out of range for a column of length {length}")]
    IndexOutOfRange {
        /// Index that was requested
        index: usize,
        /// Length of the column at the time of the request
        length: usize,
    },
    /// Insert position beyond the end of a column. Insertion accepts the
    /// inclusive range `0..=len()`, so this is only raised for `index > len()`.
    #[error("cannot insert at index {index} into a column of length {length}")]
    IndexPastEnd {
        /// Index that was requested
        index: usize,
        /// Length of the column at the time of the request
        length: usize,
    },
    /// Typed access through the type-erased holder did not match the
    /// column's fixed type tag.
    #[error("requested column type {requested} does not match stored type {found}")]
    TypeMismatch {
        /// Element type the caller asked for
        requested: String,
        /// Element type the column was created with
        found: String,
    },
    /// Bit index outside the width of a bit signature.
    #[error("bit {bit} is out of range for a signature of width {width}")]
    BitOutOfRange {
        /// Bit position that was requested
        bit: usize,
        /// Width of the signature in bits
        width: usize,
    },
    /// A signature of the wrong width was offered to a bit-signature column.
    #[error("expected a signature of width {expected}, got width {found}")]
    SignatureWidthMismatch {
        /// Width the column was configured with
        expected: usize,
        /// Width of the offered signature
        found: usize,
    },
    /// A string identifier did not name any column type.
    #[error("unknown column type identifier: {0}")]
    UnknownColumnType(String),
    /// The sink rejected a serialized value.
    #[error("failed to write the value at index {index}: {error}")]
    ValueWrite {
        /// Index of the value that was being serialized
        index: usize,
        /// Error reported by the sink
        error: std::io::Error,
    },
}

impl ColumnError {
    /// Builds a [ColumnError::TypeMismatch] from the displayed forms
    /// of the two type tags.
    pub(crate) fn type_mismatch(requested: impl Display, found: impl Display) -> Self {
        Self::TypeMismatch {
            requested: requested.to_string(),
            found: found.to_string(),
        }
    }

    /// Unwraps the sink error behind a failed MessagePack write.
    pub(crate) fn value_write(index: usize, error: ValueWriteError<std::io::Error>) -> Self {
        let error = match error {
            ValueWriteError::InvalidMarkerWrite(error)
            | ValueWriteError::InvalidDataWrite(error) => error,
        };

        Self::ValueWrite { index, error }
    }
}
