//! This module collects the primitive datatypes a column can hold,
//! together with the tags that identify them at runtime.

/// Module for defining [BitSignature]
pub mod bit_signature;
pub use bit_signature::BitSignature;
/// Module for defining [ColumnDataType]
pub mod column_data_type;
pub use column_data_type::ColumnDataType;
/// Module for defining [ColumnType]
pub mod column_type;
pub use column_type::{ColumnType, SCALAR_COLUMN_TYPES};
/// Module for defining [ValueT]
pub mod value;
pub use value::ValueT;
