//! This module defines [ColumnType],
//! which is an enum containing a variant for each supported column type.

use std::{fmt::Display, str::FromStr};

use crate::error::ColumnError;

/// Descriptors to refer to the possible column types at runtime.
///
/// A column's type is fixed when the column is created and never
/// changes afterwards.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub enum ColumnType {
    /// Data type [i8]
    Int8,
    /// Data type [i16]
    Int16,
    /// Data type [i32]
    Int32,
    /// Data type [i64]
    Int64,
    /// Data type [u8]
    UInt8,
    /// Data type [u16]
    UInt16,
    /// Data type [u32]
    UInt32,
    /// Data type [u64]
    UInt64,
    /// Data type [String]
    String,
    /// Data type [f32]
    Float,
    /// Data type [f64]
    Double,
    /// Fixed-width bit signatures (e.g. hashed feature sketches);
    /// the width in bits is part of the column's type
    BitSignature(usize),
}

/// A list of all scalar (non-bit-signature) [ColumnType]s,
/// in the order they appear in the enum.
pub const SCALAR_COLUMN_TYPES: &[ColumnType] = &[
    ColumnType::Int8,
    ColumnType::Int16,
    ColumnType::Int32,
    ColumnType::Int64,
    ColumnType::UInt8,
    ColumnType::UInt16,
    ColumnType::UInt32,
    ColumnType::UInt64,
    ColumnType::String,
    ColumnType::Float,
    ColumnType::Double,
];

impl Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Int8 => write!(f, "int8"),
            ColumnType::Int16 => write!(f, "int16"),
            ColumnType::Int32 => write!(f, "int32"),
            ColumnType::Int64 => write!(f, "int64"),
            ColumnType::UInt8 => write!(f, "uint8"),
            ColumnType::UInt16 => write!(f, "uint16"),
            ColumnType::UInt32 => write!(f, "uint32"),
            ColumnType::UInt64 => write!(f, "uint64"),
            ColumnType::String => write!(f, "string"),
            ColumnType::Float => write!(f, "float"),
            ColumnType::Double => write!(f, "double"),
            ColumnType::BitSignature(width) => write!(f, "bit_signature({width})"),
        }
    }
}

impl FromStr for ColumnType {
    type Err = ColumnError;

    /// Parses the identifiers produced by [Display], as they appear in
    /// configuration-driven table schemas.
    fn from_str(identifier: &str) -> Result<Self, Self::Err> {
        let identifier = identifier.trim();

        if let Some(rest) = identifier.strip_prefix("bit_signature(") {
            if let Some(width) = rest.strip_suffix(')') {
                if let Ok(width) = width.trim().parse::<usize>() {
                    return Ok(ColumnType::BitSignature(width));
                }
            }
            return Err(ColumnError::UnknownColumnType(identifier.to_string()));
        }

        Ok(match identifier {
            "int8" => ColumnType::Int8,
            "int16" => ColumnType::Int16,
            "int32" => ColumnType::Int32,
            "int64" => ColumnType::Int64,
            "uint8" => ColumnType::UInt8,
            "uint16" => ColumnType::UInt16,
            "uint32" => ColumnType::UInt32,
            "uint64" => ColumnType::UInt64,
            "string" => ColumnType::String,
            "float" => ColumnType::Float,
            "double" => ColumnType::Double,
            _ => return Err(ColumnError::UnknownColumnType(identifier.to_string())),
        })
    }
}
