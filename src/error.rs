use std::{error, fmt, result};

/// Everything that can go wrong while addressing, transforming or building bit containers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A [`BitSet`](crate::set::BitSet) index at or past the logical length.
    IndexOutOfRange { index: usize, length: usize },
    /// A [`BitField`](crate::field::BitField) cell index past the last cell.
    FieldIndexOutOfRange { index: u8 },
    /// A unit-level rotate/shift by a full unit width or more.
    CountOutOfRange { count: u8 },
    /// A bit can only be written as `0` or `1`.
    InvalidBitValue { value: u8 },
    /// Whole-vector rotate/shift requested with a count of zero.
    ZeroCount,
    /// Whole-vector rotate/shift on a set of length zero.
    EmptySet,
    /// A buffer of `bytes` bytes could not be reserved.
    Allocation { bytes: usize },
    /// A bit string contained something other than `'0'` or `'1'`.
    InvalidCharacter { position: usize, found: char },
    /// A replay step that could not be parsed.
    InvalidStep { step: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfRange { index, length } => {
                write!(f, "index {index} is out of range for a bit set of length {length}")
            }
            Error::FieldIndexOutOfRange { index } => {
                write!(f, "bit index {index} is out of range for an 8-bit field")
            }
            Error::CountOutOfRange { count } => {
                write!(f, "cannot rotate or shift an 8-bit field by {count} bits")
            }
            Error::InvalidBitValue { value } => {
                write!(f, "{value} is not a bit value, expected 0 or 1")
            }
            Error::ZeroCount => write!(f, "rotate/shift count must be non-zero"),
            Error::EmptySet => write!(f, "cannot rotate or shift an empty bit set"),
            Error::Allocation { bytes } => write!(f, "failed to allocate {bytes} bytes"),
            Error::InvalidCharacter { position, found } => {
                write!(f, "unexpected character {found:?} at position {position}")
            }
            Error::InvalidStep { step } => write!(f, "cannot parse step {step:?}"),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = result::Result<T, Error>;
