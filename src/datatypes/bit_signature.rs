//! This module defines [BitSignature], a fixed-width bit vector used
//! for compact hashed feature signatures.

use std::fmt::Display;

use bitvec::{order::Msb0, vec::BitVec};

use crate::error::ColumnError;

/// A fixed-width sequence of bits, addressable by bit position.
///
/// The width is set at construction and never changes. In the packed
/// byte representation the first bit of the signature is the most
/// significant bit of the first byte, and any pad bits in the last
/// byte are zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitSignature {
    bits: BitVec<u8, Msb0>,
}

impl BitSignature {
    /// Constructs an all-zero signature of `width` bits.
    pub fn zeroed(width: usize) -> Self {
        Self {
            bits: BitVec::repeat(false, width),
        }
    }

    /// Reconstructs a signature of `width` bits from its packed byte
    /// representation.
    ///
    /// Returns `None` if `bytes` does not hold exactly the
    /// `ceil(width / 8)` bytes the packed form requires.
    pub fn from_bytes(width: usize, bytes: &[u8]) -> Option<Self> {
        if bytes.len() != width.div_ceil(8) {
            return None;
        }

        let mut bits = BitVec::<u8, Msb0>::from_slice(bytes);
        bits.truncate(width);
        bits.set_uninitialized(false);

        Some(Self { bits })
    }

    /// Returns the width of the signature in bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns true iff the signature has width zero.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the bit at position `bit`,
    /// or `None` if `bit` is outside the width.
    pub fn get(&self, bit: usize) -> Option<bool> {
        self.bits.get(bit).map(|bit| *bit)
    }

    /// Sets the bit at position `bit` to `value`.
    pub fn set(&mut self, bit: usize, value: bool) -> Result<(), ColumnError> {
        if bit >= self.bits.len() {
            return Err(ColumnError::BitOutOfRange {
                bit,
                width: self.bits.len(),
            });
        }

        self.bits.set(bit, value);
        Ok(())
    }

    /// Inverts the bit at position `bit`.
    pub fn flip(&mut self, bit: usize) -> Result<(), ColumnError> {
        if bit >= self.bits.len() {
            return Err(ColumnError::BitOutOfRange {
                bit,
                width: self.bits.len(),
            });
        }

        let current = self.bits[bit];
        self.bits.set(bit, !current);
        Ok(())
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Returns the number of positions at which `self` and `other`
    /// differ, or `None` if their widths differ.
    pub fn hamming_distance(&self, other: &Self) -> Option<usize> {
        if self.len() != other.len() {
            return None;
        }

        Some(
            self.bits
                .iter()
                .by_vals()
                .zip(other.bits.iter().by_vals())
                .filter(|(left, right)| left != right)
                .count(),
        )
    }

    /// Returns the packed byte representation.
    pub fn as_raw_bytes(&self) -> &[u8] {
        self.bits.as_raw_slice()
    }
}

impl Display for BitSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in self.bits.iter().by_vals() {
            write!(f, "{}", u8::from(bit))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::BitSignature;
    use crate::error::ColumnError;
    use test_log::test;

    #[test]
    fn zeroed_signature() {
        let signature = BitSignature::zeroed(12);
        assert_eq!(signature.len(), 12);
        assert_eq!(signature.count_ones(), 0);
        assert_eq!(signature.get(0), Some(false));
        assert_eq!(signature.get(11), Some(false));
        assert_eq!(signature.get(12), None);
    }

    #[test]
    fn set_and_flip() {
        let mut signature = BitSignature::zeroed(8);
        signature.set(0, true).unwrap();
        signature.set(7, true).unwrap();
        assert_eq!(signature.get(0), Some(true));
        assert_eq!(signature.get(7), Some(true));
        assert_eq!(signature.count_ones(), 2);

        signature.flip(7).unwrap();
        signature.flip(3).unwrap();
        assert_eq!(signature.get(7), Some(false));
        assert_eq!(signature.get(3), Some(true));
        assert_eq!(signature.count_ones(), 2);

        assert!(matches!(
            signature.set(8, true),
            Err(ColumnError::BitOutOfRange { bit: 8, width: 8 })
        ));
        assert!(matches!(
            signature.flip(100),
            Err(ColumnError::BitOutOfRange { bit: 100, width: 8 })
        ));
    }

    #[test]
    fn packed_bytes() {
        let mut signature = BitSignature::zeroed(12);
        signature.set(0, true).unwrap();
        signature.set(8, true).unwrap();

        // first bit is the most significant bit of the first byte
        assert_eq!(signature.as_raw_bytes(), &[0b1000_0000, 0b1000_0000]);

        let restored = BitSignature::from_bytes(12, signature.as_raw_bytes()).unwrap();
        assert_eq!(restored, signature);
    }

    #[test]
    fn from_bytes_pads_are_cleared() {
        // pad bits in the input must not leak into the signature
        let signature = BitSignature::from_bytes(4, &[0xff]).unwrap();
        assert_eq!(signature.len(), 4);
        assert_eq!(signature.count_ones(), 4);
        assert_eq!(signature.as_raw_bytes(), &[0b1111_0000]);
    }

    #[test]
    fn from_bytes_length_mismatch() {
        assert!(BitSignature::from_bytes(12, &[0u8; 1]).is_none());
        assert!(BitSignature::from_bytes(12, &[0u8; 3]).is_none());
        assert!(BitSignature::from_bytes(0, &[]).is_some());
    }

    #[test]
    fn hamming_distance() {
        let mut left = BitSignature::zeroed(16);
        let mut right = BitSignature::zeroed(16);
        assert_eq!(left.hamming_distance(&right), Some(0));

        left.set(1, true).unwrap();
        left.set(5, true).unwrap();
        right.set(5, true).unwrap();
        right.set(10, true).unwrap();
        assert_eq!(left.hamming_distance(&right), Some(2));

        let narrow = BitSignature::zeroed(8);
        assert_eq!(left.hamming_distance(&narrow), None);
    }

    #[test]
    fn display() {
        let mut signature = BitSignature::zeroed(4);
        signature.set(1, true).unwrap();
        assert_eq!(signature.to_string(), "0100");
    }
}
