//! This module defines [ColumnVector].

use std::{io::Write, ops::Index};

use crate::{
    datatypes::{ColumnDataType, ColumnType},
    error::ColumnError,
};

use super::Column;

/// Simple implementation of a typed column that uses [Vec] to store data.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnVector<T> {
    data: Vec<T>,
}

impl<T> Default for ColumnVector<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T: ColumnDataType> ColumnVector<T> {
    /// Constructs a new [ColumnVector] from a vector of the suitable type.
    pub fn new(data: Vec<T>) -> ColumnVector<T> {
        ColumnVector { data }
    }

    /// Appends `value` to the end of the column.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    /// Inserts `value` before the row at `index`, shifting all
    /// subsequent rows up by one position (order-preserving).
    ///
    /// `index` may be anything in `0..=len()`; inserting at `len()`
    /// is equivalent to [ColumnVector::push].
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ColumnError> {
        if index > self.data.len() {
            return Err(ColumnError::IndexPastEnd {
                index,
                length: self.data.len(),
            });
        }

        self.data.insert(index, value);
        Ok(())
    }

    /// Replaces the value at `index` in place.
    pub fn update(&mut self, index: usize, value: T) -> Result<(), ColumnError> {
        let length = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ColumnError::IndexOutOfRange { index, length }),
        }
    }

    /// Returns a reference to the value at `index`.
    pub fn get(&self, index: usize) -> Result<&T, ColumnError> {
        self.data.get(index).ok_or(ColumnError::IndexOutOfRange {
            index,
            length: self.data.len(),
        })
    }

    /// Returns a mutable reference to the value at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ColumnError> {
        let length = self.data.len();
        self.data
            .get_mut(index)
            .ok_or(ColumnError::IndexOutOfRange { index, length })
    }

    /// Returns an iterator over the values of the column.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: ColumnDataType> Column for ColumnVector<T> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn column_type(&self) -> ColumnType {
        T::COLUMN_TYPE
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

    fn pack_value_at<W: Write>(&self, index: usize, writer: &mut W) -> Result<(), ColumnError> {
        let value = self.get(index)?;
        T::pack(value, writer).map_err(|error| ColumnError::value_write(index, error))
    }

    fn dump(&self) -> String {
        let mut rendered = format!("[column ({}) len:{} {{", self.column_type(), self.len());
        for value in &self.data {
            rendered.push_str(&format!(" {value:?}"));
        }
        rendered.push_str(" }]");
        rendered
    }
}

impl<T: ColumnDataType> Index<usize> for ColumnVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::{Column, ColumnVector};
    use crate::error::ColumnError;
    use quickcheck_macros::quickcheck;
    use test_log::test;

    #[test]
    fn push_and_get() {
        let mut column = ColumnVector::<i32>::default();
        column.push(10);
        column.push(20);
        column.push(30);
        assert_eq!(column.len(), 3);
        assert_eq!(*column.get(2).unwrap(), 30);
        assert_eq!(column[0], 10);
    }

    #[test]
    fn swap_remove_scenario() {
        // remove(0) moves the last row into slot 0
        let mut column = ColumnVector::new(vec![10i32, 20, 30]);
        column.remove(0).unwrap();
        assert_eq!(column.len(), 2);
        assert_eq!(column[0], 30);
        assert_eq!(column[1], 20);

        assert!(matches!(
            column.get(5),
            Err(ColumnError::IndexOutOfRange { index: 5, length: 2 })
        ));

        column.insert(2, 99).unwrap();
        assert_eq!(column.len(), 3);
        assert_eq!(column[0], 30);
        assert_eq!(column[1], 20);
        assert_eq!(column[2], 99);
    }

    #[test]
    fn update_string_scenario() {
        let mut column = ColumnVector::<String>::default();
        assert!(matches!(
            column.update(0, "a".to_string()),
            Err(ColumnError::IndexOutOfRange { index: 0, length: 0 })
        ));

        column.push("a".to_string());
        column.update(0, "b".to_string()).unwrap();
        assert_eq!(column.get(0).unwrap(), "b");
    }

    #[test]
    fn insert_at_len_is_append() {
        let mut column = ColumnVector::new(vec![1u8, 2]);
        column.insert(2, 3).unwrap();
        assert_eq!(column.len(), 3);
        assert_eq!(column[2], 3);

        assert!(matches!(
            column.insert(5, 4),
            Err(ColumnError::IndexPastEnd { index: 5, length: 3 })
        ));
        assert_eq!(column.len(), 3);
    }

    #[test]
    fn failed_operations_are_noops() {
        let mut column = ColumnVector::new(vec![4i64, 5]);
        let before = column.clone();

        assert!(column.remove(2).is_err());
        assert!(column.update(2, 9).is_err());
        assert!(column.get_mut(2).is_err());
        assert!(column.insert(3, 9).is_err());
        assert_eq!(column, before);
    }

    #[test]
    fn clear_empties_the_column() {
        let mut column = ColumnVector::new(vec![1.5f64, 2.5]);
        column.clear();
        assert_eq!(column.len(), 0);
        assert!(column.is_empty());
    }

    #[test]
    fn dump_rendering() {
        let column = ColumnVector::new(vec![10i32, 20]);
        assert_eq!(column.dump(), "[column (int32) len:2 { 10 20 }]");
    }

    #[test]
    fn pack_out_of_range() {
        let column = ColumnVector::new(vec![1u32]);
        let mut buffer = Vec::new();
        assert!(matches!(
            column.pack_value_at(1, &mut buffer),
            Err(ColumnError::IndexOutOfRange { index: 1, length: 1 })
        ));
        assert!(buffer.is_empty());
    }

    #[test]
    fn pack_roundtrip_scalars() {
        let column = ColumnVector::new(vec![-7i32, 300, i32::MIN]);
        for index in 0..3 {
            let mut buffer = Vec::new();
            column.pack_value_at(index, &mut buffer).unwrap();
            let mut cursor = Cursor::new(&buffer[..]);
            let decoded: i64 = rmp::decode::read_int(&mut cursor).unwrap();
            assert_eq!(decoded, i64::from(column[index]));
        }

        let column = ColumnVector::new(vec![u64::MAX]);
        let mut buffer = Vec::new();
        column.pack_value_at(0, &mut buffer).unwrap();
        let mut cursor = Cursor::new(&buffer[..]);
        let decoded: u64 = rmp::decode::read_int(&mut cursor).unwrap();
        assert_eq!(decoded, u64::MAX);

        let column = ColumnVector::new(vec![2.25f32]);
        let mut buffer = Vec::new();
        column.pack_value_at(0, &mut buffer).unwrap();
        let mut cursor = Cursor::new(&buffer[..]);
        assert_eq!(rmp::decode::read_f32(&mut cursor).unwrap(), 2.25);

        let column = ColumnVector::new(vec![-0.5f64]);
        let mut buffer = Vec::new();
        column.pack_value_at(0, &mut buffer).unwrap();
        let mut cursor = Cursor::new(&buffer[..]);
        assert_eq!(rmp::decode::read_f64(&mut cursor).unwrap(), -0.5);
    }

    #[test]
    fn pack_roundtrip_string() {
        use std::io::Read;

        let column = ColumnVector::new(vec!["ネコ".to_string()]);
        let mut buffer = Vec::new();
        column.pack_value_at(0, &mut buffer).unwrap();

        let mut cursor = Cursor::new(&buffer[..]);
        let length = rmp::decode::read_str_len(&mut cursor).unwrap() as usize;
        let mut bytes = vec![0u8; length];
        cursor.read_exact(&mut bytes).unwrap();
        assert_eq!(std::str::from_utf8(&bytes).unwrap(), "ネコ");
    }

    #[quickcheck]
    fn push_increments_len(values: Vec<i16>, value: i16) -> bool {
        let mut column = ColumnVector::new(values);
        let length = column.len();
        column.push(value);

        column.len() == length + 1 && *column.get(length).unwrap() == value
    }

    #[quickcheck]
    fn remove_swaps_in_last(values: Vec<u32>, index: usize) -> bool {
        if values.is_empty() {
            return true;
        }
        let index = index % values.len();

        let mut column = ColumnVector::new(values.clone());
        column.remove(index).unwrap();

        let mut expected = values;
        expected.swap_remove(index);

        column.len() == expected.len()
            && expected
                .iter()
                .enumerate()
                .all(|(position, value)| column[position] == *value)
    }

    #[quickcheck]
    fn insert_preserves_order(values: Vec<i64>, index: usize, value: i64) -> bool {
        let index = index % (values.len() + 1);

        let mut column = ColumnVector::new(values.clone());
        column.insert(index, value).unwrap();

        let mut expected = values;
        expected.insert(index, value);

        column.len() == expected.len()
            && expected
                .iter()
                .enumerate()
                .all(|(position, value)| column[position] == *value)
    }
}
