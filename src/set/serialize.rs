use std::{
    fmt::{self, Display, Write},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{
    error::{Error, Result},
    field::Bit,
    set::BitSet,
};

/// Decodes one character of a bit string found at `position`.
pub(super) fn bit_from_char(position: usize, c: char) -> Result<Bit> {
    match c {
        '0' => Ok(0),
        '1' => Ok(1),
        found => Err(Error::InvalidCharacter { position, found }),
    }
}

impl BitSet {
    /// Builds a set whose length and contents are given by a string of `'0'`/`'1'`,
    /// index `0` first. This is the inverse of [`BitSet::to_bit_string`].
    ///
    /// # Errors
    /// [`Error::InvalidCharacter`] for the first character that is not a bit.
    ///
    /// # Examples
    /// ```
    /// use bitkit::set::BitSet;
    ///
    /// let bs = BitSet::from_bit_string("0110").unwrap();
    /// assert_eq!(bs.len(), 4);
    /// assert!(bs.is_bit_set_at(1));
    /// assert!(BitSet::from_bit_string("01x0").is_err());
    /// ```
    pub fn from_bit_string(text: &str) -> Result<Self> {
        let mut bitset = BitSet::new(text.chars().count())?;
        for (position, c) in text.chars().enumerate() {
            bitset.set_bit_at(position, bit_from_char(position, c)?)?;
        }
        Ok(bitset)
    }
}

impl FromStr for BitSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BitSet::from_bit_string(s)
    }
}

/// Same characters as [`BitSet::to_bit_string`], written straight to the formatter.
impl Display for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..self.len() {
            f.write_char(if self.is_bit_set_at(index) { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl Serialize for BitSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BitSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        BitSet::from_bit_string(&text).map_err(de::Error::custom)
    }
}
