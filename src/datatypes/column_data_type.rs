//! This module defines the trait [ColumnDataType]
//! and provides implementations for all scalar and string element types.

use std::{fmt::Debug, io::Write};

use rmp::encode::{self, ValueWriteError};

use crate::columnar::column::{vector::ColumnVector, ColumnT};

use super::{column_type::ColumnType, value::ValueT};

/// Trait implemented by all element types that a
/// [ColumnVector] can hold.
///
/// It ties each element type to its [ColumnType] tag, to the matching
/// variant of [ColumnT] (the tag comparison that stands in for runtime
/// downcasting), and to the MessagePack encoding of a single value.
pub trait ColumnDataType: Debug + Clone + PartialEq + Into<ValueT> + Sized {
    /// The tag identifying this element type.
    const COLUMN_TYPE: ColumnType;

    /// Returns the typed column stored in `column`,
    /// or `None` if `column` holds a different element type.
    fn column_ref(column: &ColumnT) -> Option<&ColumnVector<Self>>;

    /// Mutable version of [ColumnDataType::column_ref].
    fn column_mut(column: &mut ColumnT) -> Option<&mut ColumnVector<Self>>;

    /// Writes `value` to `writer` as a single self-describing
    /// MessagePack token.
    fn pack<W: Write>(
        value: &Self,
        writer: &mut W,
    ) -> Result<(), ValueWriteError<std::io::Error>>;
}

macro_rules! column_data_type {
    ($type:ty, $variant:ident, |$value:ident, $writer:ident| $pack:expr) => {
        impl ColumnDataType for $type {
            const COLUMN_TYPE: ColumnType = ColumnType::$variant;

            fn column_ref(column: &ColumnT) -> Option<&ColumnVector<Self>> {
                match column {
                    ColumnT::$variant(column) => Some(column),
                    _ => None,
                }
            }

            fn column_mut(column: &mut ColumnT) -> Option<&mut ColumnVector<Self>> {
                match column {
                    ColumnT::$variant(column) => Some(column),
                    _ => None,
                }
            }

            fn pack<W: Write>(
                $value: &Self,
                $writer: &mut W,
            ) -> Result<(), ValueWriteError<std::io::Error>> {
                $pack
            }
        }
    };
}

// Integers use the minimal signed/unsigned MessagePack representation,
// which is what readers of the persisted tables expect.
column_data_type!(i8, Int8, |value, writer| {
    encode::write_sint(writer, i64::from(*value)).map(|_| ())
});
column_data_type!(i16, Int16, |value, writer| {
    encode::write_sint(writer, i64::from(*value)).map(|_| ())
});
column_data_type!(i32, Int32, |value, writer| {
    encode::write_sint(writer, i64::from(*value)).map(|_| ())
});
column_data_type!(i64, Int64, |value, writer| {
    encode::write_sint(writer, *value).map(|_| ())
});
column_data_type!(u8, UInt8, |value, writer| {
    encode::write_uint(writer, u64::from(*value)).map(|_| ())
});
column_data_type!(u16, UInt16, |value, writer| {
    encode::write_uint(writer, u64::from(*value)).map(|_| ())
});
column_data_type!(u32, UInt32, |value, writer| {
    encode::write_uint(writer, u64::from(*value)).map(|_| ())
});
column_data_type!(u64, UInt64, |value, writer| {
    encode::write_uint(writer, *value).map(|_| ())
});
column_data_type!(String, String, |value, writer| {
    encode::write_str(writer, value)
});
column_data_type!(f32, Float, |value, writer| {
    encode::write_f32(writer, *value)
});
column_data_type!(f64, Double, |value, writer| {
    encode::write_f64(writer, *value)
});
