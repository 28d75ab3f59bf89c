//! This module defines [AbstractColumn],
//! the type-erased owner of exactly one column.

use std::io::Write;

use delegate::delegate;

use crate::{
    datatypes::{ColumnDataType, ColumnType, ValueT},
    error::ColumnError,
};

use super::column::{bit_signature::BitSignatureColumn, vector::ColumnVector, Column, ColumnT};

/// Type-erased owner of exactly one column.
///
/// The owned column is built once from a [ColumnType] and lives
/// exactly as long as its holder (or until [AbstractColumn::swap]
/// hands it to another holder). All typed access goes through
/// [AbstractColumn::typed] and [AbstractColumn::typed_mut], the single
/// boundary where the requested element type is checked against the
/// column's fixed tag.
#[derive(Debug, Clone, PartialEq)]
pub struct AbstractColumn {
    column: ColumnT,
}

impl AbstractColumn {
    /// Creates a holder owning a fresh, empty column of `column_type`.
    pub fn new(column_type: ColumnType) -> Self {
        Self {
            column: ColumnT::new(column_type),
        }
    }

    delegate! {
        to self.column {
            /// Returns the number of rows in the owned column.
            pub fn len(&self) -> usize;
            /// Returns true iff the owned column is empty.
            pub fn is_empty(&self) -> bool;
            /// Returns the type tag of the owned column.
            pub fn column_type(&self) -> ColumnType;
            /// Removes all rows from the owned column.
            pub fn clear(&mut self);
            /// Removes the row at `index` by swapping in the last row
            /// and truncating; the relative order of rows after `index`
            /// is not preserved.
            pub fn remove(&mut self, index: usize) -> Result<(), ColumnError>;
            /// Returns a human-readable rendering of the owned column.
            pub fn dump(&self) -> String;
            /// Returns the value at `index`, wrapped in a [ValueT].
            #[call(get)]
            pub fn value(&self, index: usize) -> Result<ValueT, ColumnError>;
        }
    }

    /// Writes the value at `index` to `writer` as a single
    /// self-describing MessagePack token.
    pub fn pack_value_at<W: Write>(
        &self,
        index: usize,
        writer: &mut W,
    ) -> Result<(), ColumnError> {
        self.column.pack_value_at(index, writer)
    }

    /// Returns a statically-typed view of the owned column.
    ///
    /// Fails with [ColumnError::TypeMismatch] if the column was not
    /// created with `T`'s tag; no prior mutation can make this succeed
    /// for a different element type.
    pub fn typed<T: ColumnDataType>(&self) -> Result<&ColumnVector<T>, ColumnError> {
        T::column_ref(&self.column).ok_or_else(|| {
            ColumnError::type_mismatch(T::COLUMN_TYPE, self.column.column_type())
        })
    }

    /// Mutable version of [AbstractColumn::typed].
    pub fn typed_mut<T: ColumnDataType>(&mut self) -> Result<&mut ColumnVector<T>, ColumnError> {
        let found = self.column.column_type();
        T::column_mut(&mut self.column)
            .ok_or_else(|| ColumnError::type_mismatch(T::COLUMN_TYPE, found))
    }

    /// Returns the owned column as a bit-signature column.
    pub fn as_bit_signature(&self) -> Result<&BitSignatureColumn, ColumnError> {
        match &self.column {
            ColumnT::BitSignature(column) => Ok(column),
            column => Err(ColumnError::type_mismatch(
                "bit_signature",
                column.column_type(),
            )),
        }
    }

    /// Mutable version of [AbstractColumn::as_bit_signature].
    pub fn as_bit_signature_mut(&mut self) -> Result<&mut BitSignatureColumn, ColumnError> {
        match &mut self.column {
            ColumnT::BitSignature(column) => Ok(column),
            column => Err(ColumnError::type_mismatch(
                "bit_signature",
                column.column_type(),
            )),
        }
    }

    /// Appends `value` to the end of the owned column.
    pub fn push<T: ColumnDataType>(&mut self, value: T) -> Result<(), ColumnError> {
        self.typed_mut::<T>().map(|column| column.push(value))
    }

    /// Inserts `value` before the row at `index` (order-preserving;
    /// `index == len()` appends).
    ///
    /// A [ColumnError::TypeMismatch] is surfaced before any index check.
    pub fn insert<T: ColumnDataType>(&mut self, index: usize, value: T) -> Result<(), ColumnError> {
        self.typed_mut::<T>()?.insert(index, value)
    }

    /// Replaces the value at `index` in place.
    ///
    /// A [ColumnError::TypeMismatch] is surfaced before any index check.
    pub fn update<T: ColumnDataType>(&mut self, index: usize, value: T) -> Result<(), ColumnError> {
        self.typed_mut::<T>()?.update(index, value)
    }

    /// Exchanges the owned columns of two holders.
    ///
    /// Used when rebuilding a table's columns; neither holder is ever
    /// observable without a column.
    pub fn swap(&mut self, other: &mut AbstractColumn) {
        log::trace!(
            "swapping columns of type {} and {}",
            self.column.column_type(),
            other.column.column_type()
        );

        std::mem::swap(&mut self.column, &mut other.column);
    }

    /// Returns a reference to the owned column.
    pub fn column(&self) -> &ColumnT {
        &self.column
    }
}

impl From<ColumnT> for AbstractColumn {
    fn from(column: ColumnT) -> Self {
        Self { column }
    }
}
