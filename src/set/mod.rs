//! Arbitrary-length bit vectors backed by [`BitField`](crate::field::BitField) units.
//!
//! # Submodules
//!
//! - `bit_set`: the [`BitSet`] container, its lifecycle and indexed accessors
//! - `transform`: whole-vector rotations and shifts through the bit string form
//! - `serialize`: textual and serde representations

mod bit_set;
mod serialize;
mod transform;

pub use bit_set::*;
