//! This module collects the column data structures:
//! concrete typed columns, the type-erased [ColumnT] with its factory,
//! and the owning holder [AbstractColumn].

/// Module for defining the type-erased holder [AbstractColumn]
pub mod abstract_column;
pub use abstract_column::AbstractColumn;
/// Module for defining [Column] and [ColumnT]
pub mod column;
pub use column::{Column, ColumnT};
