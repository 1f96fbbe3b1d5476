use std::fmt::{self, Debug};

use tracing::debug;

use crate::{
    error::{Error, Result},
    field::{Bit, BitField, FIELD_WIDTH},
};

/// Number of [`BitField`] units owned by a [`BitSet`] of `length` bits.
///
/// One unit more than strictly needed is always allocated.
///
/// # Examples
///
/// ```
/// use bitkit::set::unit_count;
///
/// assert_eq!(unit_count(0), 1);
/// assert_eq!(unit_count(8), 2);
/// assert_eq!(unit_count(9), 3);
/// ```
pub fn unit_count(length: usize) -> usize {
    length.div_ceil(FIELD_WIDTH as usize) + 1
}

/// A fixed-length vector of bits packed into a contiguous buffer of
/// [`BitField`] units.
///
/// Bit `i` lives in unit `i / 8`, cell `i % 8`. Every accessor is bounds-checked
/// against the logical length and reports failures through [`Result`], with the
/// exception of [`BitSet::is_bit_set_at`] which answers `false` for anything it
/// cannot read.
///
/// # Examples
///
/// ```
/// use bitkit::set::BitSet;
///
/// let mut bs = BitSet::new(10).unwrap();
/// assert_eq!(bs.get_bit_at(3), Ok(0));
///
/// bs.set_bit_at(3, 1).unwrap();
/// assert!(bs.is_bit_set_at(3));
/// assert!(bs.get_bit_at(10).is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BitSet {
    /*private*/ units: Box<[BitField]>,
    /*private*/ length: usize,
}

impl BitSet {
    /// Constructs a new [`BitSet`] of `length` bits, all cleared.
    ///
    /// # Errors
    /// [`Error::Allocation`] if the unit buffer cannot be reserved. Nothing is
    /// kept allocated in that case.
    pub fn new(length: usize) -> Result<Self> {
        let count = unit_count(length);
        let mut units = Vec::new();
        units
            .try_reserve_exact(count)
            .map_err(|_| Error::Allocation {
                bytes: count * size_of::<BitField>(),
            })?;
        units.resize(count, BitField::default());

        Ok(BitSet {
            units: units.into_boxed_slice(),
            length,
        })
    }

    /// Releases a set and every unit it owns.
    ///
    /// Returns `false` without doing anything when handed no set.
    ///
    /// # Examples
    /// ```
    /// use bitkit::set::BitSet;
    ///
    /// let bs = BitSet::new(16).unwrap();
    /// assert!(BitSet::destroy(Some(bs)));
    /// assert!(!BitSet::destroy(None));
    /// ```
    pub fn destroy(bitset: Option<Self>) -> bool {
        match bitset {
            Some(bitset) => {
                drop(bitset);
                true
            }
            None => false,
        }
    }

    /// Logical number of bits.
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Backing units, including the spare one past the last used unit.
    pub fn units(&self) -> &[BitField] {
        &self.units
    }

    /// Number of bits set to `1`.
    pub fn count_ones(&self) -> usize {
        // cells past `length` are never written, so whole units can be counted
        self.units
            .iter()
            .map(|unit| unit.value().count_ones() as usize)
            .sum()
    }

    #[inline]
    fn locate(&self, index: usize) -> Result<(usize, u8)> {
        if index >= self.length {
            debug!(index, length = self.length, "bit index out of range");
            return Err(Error::IndexOutOfRange {
                index,
                length: self.length,
            });
        }
        let width = FIELD_WIDTH as usize;
        Ok((index / width, (index % width) as u8))
    }

    /// Returns the bit at `index` as `0` or `1`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn get_bit_at(&self, index: usize) -> Result<Bit> {
        let (unit, offset) = self.locate(index)?;
        self.units[unit].get_bit(offset)
    }

    /// Returns `true` if the bit at `index` is `1`.
    ///
    /// Out-of-range indices read as `false`, indistinguishable from a cleared
    /// bit. Use [`BitSet::get_bit_at`] to tell the two apart.
    pub fn is_bit_set_at(&self, index: usize) -> bool {
        matches!(self.get_bit_at(index), Ok(1))
    }

    /// Writes `value` into the bit at `index`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `index >= len()`, [`Error::InvalidBitValue`]
    /// if `value` is neither `0` nor `1`. No bit is modified on failure.
    pub fn set_bit_at(&mut self, index: usize, value: Bit) -> Result<()> {
        let (unit, offset) = self.locate(index)?;
        self.units[unit].set_bit(offset, value).inspect_err(|err| {
            debug!(index, %err, "rejected bit write");
        })?;
        Ok(())
    }

    /// Inverts the bit at `index`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn flip_bit_at(&mut self, index: usize) -> Result<()> {
        let (unit, offset) = self.locate(index)?;
        self.units[unit].flip_bit(offset)?;
        Ok(())
    }

    /// Serializes the set to `len()` characters of `'0'`/`'1'`, index `0` first.
    ///
    /// # Errors
    /// [`Error::Allocation`] if the string buffer cannot be reserved.
    ///
    /// # Examples
    /// ```
    /// use bitkit::set::BitSet;
    ///
    /// let mut bs = BitSet::new(4).unwrap();
    /// bs.set_bit_at(0, 1).unwrap();
    /// assert_eq!(bs.to_bit_string().unwrap(), "1000");
    /// ```
    pub fn to_bit_string(&self) -> Result<String> {
        let mut text = String::new();
        text.try_reserve_exact(self.length)
            .map_err(|_| Error::Allocation {
                bytes: self.length,
            })?;
        for index in 0..self.length {
            let bit = self.get_bit_at(index)?;
            text.push(if bit == 1 { '1' } else { '0' });
        }
        Ok(text)
    }
}

impl Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitSet")
            .field("length", &self.length)
            .field("bits", &format_args!("{self}"))
            .finish()
    }
}
