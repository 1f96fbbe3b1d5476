pub mod error;
pub mod field;
pub mod replay;
pub mod set;

pub use error::{Error, Result};
pub use field::{Bit, BitField};
pub use set::BitSet;
