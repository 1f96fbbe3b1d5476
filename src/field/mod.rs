//! Single 8-bit storage units.
//!
//! A [`BitField`] packs eight individually addressable cells into one byte. Every
//! operation is bounds-checked and leaves the unit untouched when it fails.

mod bit_field;

pub use bit_field::*;
