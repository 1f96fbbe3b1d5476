use std::fmt;

use crate::error::{Error, Result};

/// Number of addressable cells in a [`BitField`].
pub const FIELD_WIDTH: u8 = 8;

/// Mask selecting cell `i` of a [`BitField`], least significant cell first.
pub const BIT_MASKS: [u8; FIELD_WIDTH as usize] = [
    1,   // 00000001
    2,   // 00000010
    4,   // 00000100
    8,   // 00001000
    16,  // 00010000
    32,  // 00100000
    64,  // 01000000
    128, // 10000000
];

/// A single bit value. Only `0` and `1` are accepted when writing.
pub type Bit = u8;

/// Eight boolean cells packed into one byte.
///
/// Cell `0` is the least significant bit. Queries take the field by value,
/// mutations take it by `&mut` and return the new raw value on success.
///
/// # Examples
///
/// ```
/// use bitkit::field::BitField;
///
/// let mut field = BitField::default();
/// field.set_bit(0, 1).unwrap();
/// field.set_bit(7, 1).unwrap();
/// assert_eq!(field.value(), 0b1000_0001);
///
/// field.rotate_left(1).unwrap();
/// assert_eq!(field.value(), 0b0000_0011);
///
/// assert!(field.get_bit(8).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BitField(u8);

impl BitField {
    pub const fn new(value: u8) -> Self {
        BitField(value)
    }

    /// Raw byte backing this field.
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    fn mask(index: u8) -> Result<u8> {
        BIT_MASKS
            .get(index as usize)
            .copied()
            .ok_or(Error::FieldIndexOutOfRange { index })
    }

    #[inline]
    fn check_count(count: u8) -> Result<u32> {
        if count >= FIELD_WIDTH {
            return Err(Error::CountOutOfRange { count });
        }
        Ok(count as u32)
    }

    /// Returns the cell at `index` as `0` or `1`.
    ///
    /// # Errors
    /// [`Error::FieldIndexOutOfRange`] if `index > 7`.
    pub fn get_bit(self, index: u8) -> Result<Bit> {
        let mask = Self::mask(index)?;
        Ok((self.0 & mask) >> index)
    }

    /// Clears the cell at `index`, then writes `value` into it.
    ///
    /// # Errors
    /// [`Error::FieldIndexOutOfRange`] if `index > 7`, [`Error::InvalidBitValue`]
    /// if `value` is neither `0` nor `1`. The field is not modified in either case.
    pub fn set_bit(&mut self, index: u8, value: Bit) -> Result<u8> {
        let mask = Self::mask(index)?;
        if value > 1 {
            return Err(Error::InvalidBitValue { value });
        }
        self.0 = (self.0 & !mask) | (value << index);
        Ok(self.0)
    }

    /// Inverts the cell at `index`.
    ///
    /// # Errors
    /// [`Error::FieldIndexOutOfRange`] if `index > 7`.
    pub fn flip_bit(&mut self, index: u8) -> Result<u8> {
        let mask = Self::mask(index)?;
        self.0 ^= mask;
        Ok(self.0)
    }

    /// Circular rotation towards the most significant cell. A count of zero is a no-op.
    ///
    /// # Errors
    /// [`Error::CountOutOfRange`] if `count > 7`.
    pub fn rotate_left(&mut self, count: u8) -> Result<u8> {
        let count = Self::check_count(count)?;
        self.0 = self.0.rotate_left(count);
        Ok(self.0)
    }

    /// Circular rotation towards the least significant cell. A count of zero is a no-op.
    ///
    /// # Errors
    /// [`Error::CountOutOfRange`] if `count > 7`.
    pub fn rotate_right(&mut self, count: u8) -> Result<u8> {
        let count = Self::check_count(count)?;
        self.0 = self.0.rotate_right(count);
        Ok(self.0)
    }

    /// Logical shift towards the most significant cell; vacated cells become `0`.
    ///
    /// # Errors
    /// [`Error::CountOutOfRange`] if `count > 7`.
    pub fn shift_left(&mut self, count: u8) -> Result<u8> {
        let count = Self::check_count(count)?;
        self.0 <<= count;
        Ok(self.0)
    }

    /// Logical shift towards the least significant cell; vacated cells become `0`.
    ///
    /// # Errors
    /// [`Error::CountOutOfRange`] if `count > 7`.
    pub fn shift_right(&mut self, count: u8) -> Result<u8> {
        let count = Self::check_count(count)?;
        self.0 >>= count;
        Ok(self.0)
    }
}

impl From<u8> for BitField {
    fn from(value: u8) -> Self {
        BitField(value)
    }
}

impl From<BitField> for u8 {
    fn from(field: BitField) -> Self {
        field.0
    }
}

impl fmt::Binary for BitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}
