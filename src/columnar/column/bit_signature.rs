//! This module defines [BitSignatureColumn].

use std::io::Write;

use rmp::encode;

use crate::{
    datatypes::{BitSignature, ColumnType},
    error::ColumnError,
};

use super::Column;

/// A column holding one fixed-width [BitSignature] per row.
///
/// All rows share the width the column was configured with. Rows are
/// not replaced wholesale like scalar values; they are mutated bit by
/// bit through [BitSignatureColumn::set_bit] and
/// [BitSignatureColumn::flip_bit].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitSignatureColumn {
    /// Width in bits of every signature in this column
    width: usize,
    data: Vec<BitSignature>,
}

impl BitSignatureColumn {
    /// Constructs an empty column whose rows are `width` bits wide.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            data: Vec::new(),
        }
    }

    /// Returns the configured width in bits of each row.
    pub fn signature_width(&self) -> usize {
        self.width
    }

    /// Appends a zeroed signature of the configured width.
    pub fn push_row(&mut self) {
        self.data.push(BitSignature::zeroed(self.width));
    }

    /// Appends an existing signature, which must have the configured
    /// width.
    pub fn push(&mut self, signature: BitSignature) -> Result<(), ColumnError> {
        if signature.len() != self.width {
            return Err(ColumnError::SignatureWidthMismatch {
                expected: self.width,
                found: signature.len(),
            });
        }

        self.data.push(signature);
        Ok(())
    }

    /// Returns a reference to the signature at `index`.
    pub fn get(&self, index: usize) -> Result<&BitSignature, ColumnError> {
        self.data.get(index).ok_or(ColumnError::IndexOutOfRange {
            index,
            length: self.data.len(),
        })
    }

    /// Sets bit `bit` of the signature at row `index` to `value`.
    pub fn set_bit(&mut self, index: usize, bit: usize, value: bool) -> Result<(), ColumnError> {
        let length = self.data.len();
        let signature = self
            .data
            .get_mut(index)
            .ok_or(ColumnError::IndexOutOfRange { index, length })?;

        signature.set(bit, value)
    }

    /// Inverts bit `bit` of the signature at row `index`.
    pub fn flip_bit(&mut self, index: usize, bit: usize) -> Result<(), ColumnError> {
        let length = self.data.len();
        let signature = self
            .data
            .get_mut(index)
            .ok_or(ColumnError::IndexOutOfRange { index, length })?;

        signature.flip(bit)
    }

    /// Returns an iterator over the signatures of the column.
    pub fn iter(&self) -> std::slice::Iter<'_, BitSignature> {
        self.data.iter()
    }
}

impl Column for BitSignatureColumn {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::BitSignature(self.width)
    }

    fn clear(&mut self) {
        self.data.clear();
    }

    fn remove(&mut self, index: usize) -> Result<(), ColumnError> {
        if index >= self.data.len() {
            return Err(ColumnError::IndexOutOfRange {
                index,
                length: self.data.len(),
            });
        }

        self.data.swap_remove(index);
        Ok(())
    }

    /// Emits the signature as a two-element array `[bit_width, payload]`,
    /// where `payload` is the packed bit string as a MessagePack `bin`.
    fn pack_value_at<W: Write>(&self, index: usize, writer: &mut W) -> Result<(), ColumnError> {
        let signature = self.get(index)?;

        encode::write_array_len(writer, 2)
            .map_err(|error| ColumnError::value_write(index, error))?;
        encode::write_uint(writer, self.width as u64)
            .map_err(|error| ColumnError::value_write(index, error))?;
        encode::write_bin(writer, signature.as_raw_bytes())
            .map_err(|error| ColumnError::value_write(index, error))?;

        Ok(())
    }

    fn dump(&self) -> String {
        let mut rendered = format!("[column ({}) len:{} {{", self.column_type(), self.len());
        for signature in &self.data {
            rendered.push_str(&format!(" {signature}"));
        }
        rendered.push_str(" }]");
        rendered
    }
}
