//! This crate implements the columnar storage core of a feature table
//! for online machine-learning services: each column holds an ordered
//! sequence of values of a single primitive type (signed and unsigned
//! integers, floats, strings, or fixed-width bit signatures), rows are
//! addressed by integer index, and a table can hold arbitrary mixes of
//! columns behind a type-erased, tag-checked holder.
//!
//! Every value can be serialized as a self-describing MessagePack token,
//! so that the tokens of one row concatenated across a table's columns
//! form a replayable, schema-free record for persistence or RPC.
//!
//! The storage core is not internally synchronized; callers are expected
//! to wrap mutating access in an exclusive lock at a layer above.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates,
    variant_size_differences,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]

pub mod columnar;
pub mod datatypes;
pub mod error;
