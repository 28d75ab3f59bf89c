//! This module defines the tagged value enum [ValueT]
//! and provides conversions for all appropriate types.

use crate::error::ColumnError;

use super::{
    bit_signature::BitSignature, column_data_type::ColumnDataType, column_type::ColumnType,
};

/// Enum for single values of all supported column types.
/// This should not be used to represent large numbers of values,
/// due to the overhead for each value, but it is the convenient
/// interchange form for type-erased reads.
#[allow(variant_size_differences)]
#[derive(Clone, Debug, PartialEq)]
pub enum ValueT {
    /// A value of type [ColumnType::Int8]
    Int8(i8),
    /// A value of type [ColumnType::Int16]
    Int16(i16),
    /// A value of type [ColumnType::Int32]
    Int32(i32),
    /// A value of type [ColumnType::Int64]
    Int64(i64),
    /// A value of type [ColumnType::UInt8]
    UInt8(u8),
    /// A value of type [ColumnType::UInt16]
    UInt16(u16),
    /// A value of type [ColumnType::UInt32]
    UInt32(u32),
    /// A value of type [ColumnType::UInt64]
    UInt64(u64),
    /// A value of type [ColumnType::String]
    String(String),
    /// A value of type [ColumnType::Float]
    Float(f32),
    /// A value of type [ColumnType::Double]
    Double(f64),
    /// A value of type [ColumnType::BitSignature]
    BitSignature(BitSignature),
}

impl ValueT {
    /// Returns the tag of this value as a [ColumnType].
    pub fn column_type(&self) -> ColumnType {
        match self {
            Self::Int8(_) => ColumnType::Int8,
            Self::Int16(_) => ColumnType::Int16,
            Self::Int32(_) => ColumnType::Int32,
            Self::Int64(_) => ColumnType::Int64,
            Self::UInt8(_) => ColumnType::UInt8,
            Self::UInt16(_) => ColumnType::UInt16,
            Self::UInt32(_) => ColumnType::UInt32,
            Self::UInt64(_) => ColumnType::UInt64,
            Self::String(_) => ColumnType::String,
            Self::Float(_) => ColumnType::Float,
            Self::Double(_) => ColumnType::Double,
            Self::BitSignature(signature) => ColumnType::BitSignature(signature.len()),
        }
    }
}

macro_rules! value_from {
    ($variant:ident => $type:ty) => {
        impl TryFrom<ValueT> for $type {
            type Error = ColumnError;

            fn try_from(value: ValueT) -> Result<Self, Self::Error> {
                match value {
                    ValueT::$variant(value) => Ok(value),
                    other => Err(ColumnError::type_mismatch(
                        <$type as ColumnDataType>::COLUMN_TYPE,
                        other.column_type(),
                    )),
                }
            }
        }

        impl From<$type> for ValueT {
            fn from(value: $type) -> ValueT {
                ValueT::$variant(value)
            }
        }
    };
}

value_from!(Int8 => i8);
value_from!(Int16 => i16);
value_from!(Int32 => i32);
value_from!(Int64 => i64);
value_from!(UInt8 => u8);
value_from!(UInt16 => u16);
value_from!(UInt32 => u32);
value_from!(UInt64 => u64);
value_from!(String => String);
value_from!(Float => f32);
value_from!(Double => f64);

impl From<BitSignature> for ValueT {
    fn from(signature: BitSignature) -> ValueT {
        ValueT::BitSignature(signature)
    }
}

impl TryFrom<ValueT> for BitSignature {
    type Error = ColumnError;

    fn try_from(value: ValueT) -> Result<Self, Self::Error> {
        match value {
            ValueT::BitSignature(signature) => Ok(signature),
            other => Err(ColumnError::type_mismatch(
                "bit_signature",
                other.column_type(),
            )),
        }
    }
}
