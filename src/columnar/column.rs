//! This module defines the trait [Column] and its implementations,
//! as well as [ColumnT],
//! which collects all implementations of [Column] into a single object.

pub mod bit_signature;
pub mod vector;

use std::{fmt::Debug, io::Write};

use crate::{
    datatypes::{ColumnType, ValueT},
    error::ColumnError,
};

use self::{bit_signature::BitSignatureColumn, vector::ColumnVector};

/// A trait representing the type-erased contract of a column:
/// the operations available without knowing the element type.
pub trait Column: Debug {
    /// Returns the number of rows in the column.
    fn len(&self) -> usize;

    /// Returns true iff the column is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the type tag of the column,
    /// fixed for the column's lifetime.
    fn column_type(&self) -> ColumnType;

    /// Removes all rows.
    fn clear(&mut self);

    /// Removes the row at `index` by moving the last row into its place
    /// and truncating, in constant time. The relative order of rows
    /// after `index` is not preserved.
    fn remove(&mut self, index: usize) -> Result<(), ColumnError>;

    /// Writes the value at `index` to `writer` as a single
    /// self-describing MessagePack token.
    fn pack_value_at<W: Write>(&self, index: usize, writer: &mut W) -> Result<(), ColumnError>;

    /// Returns a human-readable rendering of the full column.
    /// Diagnostic only, not part of any durable contract.
    fn dump(&self) -> String;
}

/// Enum for column implementations, with one variant
/// per [ColumnType].
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnT {
    /// Case `ColumnVector<i8>`
    Int8(ColumnVector<i8>),
    /// Case `ColumnVector<i16>`
    Int16(ColumnVector<i16>),
    /// Case `ColumnVector<i32>`
    Int32(ColumnVector<i32>),
    /// Case `ColumnVector<i64>`
    Int64(ColumnVector<i64>),
    /// Case `ColumnVector<u8>`
    UInt8(ColumnVector<u8>),
    /// Case `ColumnVector<u16>`
    UInt16(ColumnVector<u16>),
    /// Case `ColumnVector<u32>`
    UInt32(ColumnVector<u32>),
    /// Case `ColumnVector<u64>`
    UInt64(ColumnVector<u64>),
    /// Case `ColumnVector<String>`
    String(ColumnVector<String>),
    /// Case `ColumnVector<f32>`
    Float(ColumnVector<f32>),
    /// Case `ColumnVector<f64>`
    Double(ColumnVector<f64>),
    /// Case [BitSignatureColumn]
    BitSignature(BitSignatureColumn),
}

/// Dispatches a method call to every variant of [ColumnT].
macro_rules! forward_to_column {
    ($self:ident, $func:ident($($arg:expr),*)) => {
        match $self {
            ColumnT::Int8(column) => column.$func($($arg),*),
            ColumnT::Int16(column) => column.$func($($arg),*),
            ColumnT::Int32(column) => column.$func($($arg),*),
            ColumnT::Int64(column) => column.$func($($arg),*),
            ColumnT::UInt8(column) => column.$func($($arg),*),
            ColumnT::UInt16(column) => column.$func($($arg),*),
            ColumnT::UInt32(column) => column.$func($($arg),*),
            ColumnT::UInt64(column) => column.$func($($arg),*),
            ColumnT::String(column) => column.$func($($arg),*),
            ColumnT::Float(column) => column.$func($($arg),*),
            ColumnT::Double(column) => column.$func($($arg),*),
            ColumnT::BitSignature(column) => column.$func($($arg),*),
        }
    };
}

impl ColumnT {
    /// Creates an empty column whose concrete element type matches
    /// `column_type`.
    ///
    /// This is the single place new column kinds are registered; the
    /// match is exhaustive, so every tag produces a column.
    pub fn new(column_type: ColumnType) -> Self {
        log::trace!("creating empty column of type {column_type}");

        match column_type {
            ColumnType::Int8 => ColumnT::Int8(ColumnVector::default()),
            ColumnType::Int16 => ColumnT::Int16(ColumnVector::default()),
            ColumnType::Int32 => ColumnT::Int32(ColumnVector::default()),
            ColumnType::Int64 => ColumnT::Int64(ColumnVector::default()),
            ColumnType::UInt8 => ColumnT::UInt8(ColumnVector::default()),
            ColumnType::UInt16 => ColumnT::UInt16(ColumnVector::default()),
            ColumnType::UInt32 => ColumnT::UInt32(ColumnVector::default()),
            ColumnType::UInt64 => ColumnT::UInt64(ColumnVector::default()),
            ColumnType::String => ColumnT::String(ColumnVector::default()),
            ColumnType::Float => ColumnT::Float(ColumnVector::default()),
            ColumnType::Double => ColumnT::Double(ColumnVector::default()),
            ColumnType::BitSignature(width) => {
                ColumnT::BitSignature(BitSignatureColumn::new(width))
            }
        }
    }

    /// Returns the value at `index`, wrapped in a [ValueT].
    pub fn get(&self, index: usize) -> Result<ValueT, ColumnError> {
        match self {
            ColumnT::Int8(column) => column.get(index).cloned().map(ValueT::from),
            ColumnT::Int16(column) => column.get(index).cloned().map(ValueT::from),
            ColumnT::Int32(column) => column.get(index).cloned().map(ValueT::from),
            ColumnT::Int64(column) => column.get(index).cloned().map(ValueT::from),
            ColumnT::UInt8(column) => column.get(index).cloned().map(ValueT::from),
            ColumnT::UInt16(column) => column.get(index).cloned().map(ValueT::from),
            ColumnT::UInt32(column) => column.get(index).cloned().map(ValueT::from),
            ColumnT::UInt64(column) => column.get(index).cloned().map(ValueT::from),
            ColumnT::String(column) => column.get(index).cloned().map(ValueT::from),
            ColumnT::Float(column) => column.get(index).cloned().map(ValueT::from),
            ColumnT::Double(column) => column.get(index).cloned().map(ValueT::from),
            ColumnT::BitSignature(column) => column.get(index).cloned().map(ValueT::from),
        }
    }
}

impl Column for ColumnT {
    fn len(&self) -> usize {
        forward_to_column!(self, len())
    }

    fn is_empty(&self) -> bool {
        forward_to_column!(self, is_empty())
    }

    fn column_type(&self) -> ColumnType {
        forward_to_column!(self, column_type())
    }

    fn clear(&mut self) {
        forward_to_column!(self, clear())
    }

    fn remove(&mut self, index: usize) -> Result<(), ColumnError> {
        forward_to_column!(self, remove(index))
    }

    fn pack_value_at<W: Write>(&self, index: usize, writer: &mut W) -> Result<(), ColumnError> {
        forward_to_column!(self, pack_value_at(index, writer))
    }

    fn dump(&self) -> String {
        forward_to_column!(self, dump())
    }
}
