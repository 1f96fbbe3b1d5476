//! Scripted sequences of bit set operations.
//!
//! A [`Step`] is one operation written as `name` or `name:arg` (`set:0`, `rotr:1`, ...).
//! [`replay`] applies steps in order and records the serialized set after each one,
//! which is what the `bitkit` binary prints.

mod runner;
mod step;

pub use runner::*;
pub use step::*;
