use std::{fmt, str::FromStr};

use crate::{
    error::{Error, Result},
    set::BitSet,
};

/// One operation applied to a [`BitSet`] during a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Set(usize),
    Clear(usize),
    Flip(usize),
    RotateLeft(usize),
    RotateRight(usize),
    ShiftLeft(usize),
    ShiftRight(usize),
}

impl Step {
    pub fn apply(self, bitset: &mut BitSet) -> Result<()> {
        match self {
            Step::Set(index) => bitset.set_bit_at(index, 1),
            Step::Clear(index) => bitset.set_bit_at(index, 0),
            Step::Flip(index) => bitset.flip_bit_at(index),
            Step::RotateLeft(count) => bitset.rotate_left(count),
            Step::RotateRight(count) => bitset.rotate_right(count),
            Step::ShiftLeft(count) => bitset.shift_left(count),
            Step::ShiftRight(count) => bitset.shift_right(count),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Step::Set(_) => "set",
            Step::Clear(_) => "clear",
            Step::Flip(_) => "flip",
            Step::RotateLeft(_) => "rotl",
            Step::RotateRight(_) => "rotr",
            Step::ShiftLeft(_) => "shl",
            Step::ShiftRight(_) => "shr",
        }
    }

    fn argument(self) -> usize {
        match self {
            Step::Set(n)
            | Step::Clear(n)
            | Step::Flip(n)
            | Step::RotateLeft(n)
            | Step::RotateRight(n)
            | Step::ShiftLeft(n)
            | Step::ShiftRight(n) => n,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name(), self.argument())
    }
}

impl FromStr for Step {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidStep {
            step: s.to_string(),
        };

        let (name, argument) = s.trim().split_once(':').ok_or_else(invalid)?;
        let argument: usize = argument.trim().parse().map_err(|_| invalid())?;

        let step = match name.trim().to_ascii_lowercase().as_str() {
            "set" => Step::Set(argument),
            "clear" => Step::Clear(argument),
            "flip" => Step::Flip(argument),
            "rotl" => Step::RotateLeft(argument),
            "rotr" => Step::RotateRight(argument),
            "shl" => Step::ShiftLeft(argument),
            "shr" => Step::ShiftRight(argument),
            _ => return Err(invalid()),
        };
        Ok(step)
    }
}

/// The walkthrough on a 16-bit set: mark both ends and their neighbours, then
/// rotate and shift the pattern back and forth.
pub fn reference_scenario() -> Vec<Step> {
    vec![
        Step::Set(0),
        Step::Set(15),
        Step::Flip(1),
        Step::Flip(14),
        Step::RotateRight(1),
        Step::RotateLeft(1),
        Step::RotateLeft(1),
        Step::RotateRight(1),
        Step::ShiftLeft(1),
        Step::ShiftLeft(1),
        Step::ShiftRight(2),
        Step::ShiftRight(2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_operation() {
        let cases = [
            ("set:3", Step::Set(3)),
            ("clear:0", Step::Clear(0)),
            ("flip:15", Step::Flip(15)),
            ("rotl:1", Step::RotateLeft(1)),
            ("rotr:20", Step::RotateRight(20)),
            ("shl:2", Step::ShiftLeft(2)),
            ("shr:0", Step::ShiftRight(0)),
            (" ROTL : 4 ", Step::RotateLeft(4)),
        ];
        for (text, expected) in cases {
            assert_eq!(text.parse::<Step>(), Ok(expected), "{text:?}");
        }
    }

    #[test]
    fn rejects_malformed_steps() {
        for text in ["", "set", "set:", "set:-1", "set:x", "nop:1", "set:1:2"] {
            assert_eq!(
                text.parse::<Step>(),
                Err(Error::InvalidStep {
                    step: text.to_string()
                }),
                "{text:?}"
            );
        }
    }

    #[test]
    fn display_parses_back() {
        for step in reference_scenario() {
            assert_eq!(step.to_string().parse::<Step>(), Ok(step));
        }
        assert_eq!(Step::ShiftRight(2).to_string(), "shr:2");
    }

    #[test]
    fn apply_delegates_to_the_set() {
        let mut bs = BitSet::new(8).unwrap();
        Step::Set(0).apply(&mut bs).unwrap();
        Step::Flip(7).apply(&mut bs).unwrap();
        assert_eq!(bs.to_string(), "10000001");

        Step::RotateLeft(1).apply(&mut bs).unwrap();
        assert_eq!(bs.to_string(), "00000011");
        Step::Clear(7).apply(&mut bs).unwrap();
        Step::ShiftRight(3).apply(&mut bs).unwrap();
        assert_eq!(bs.to_string(), "00000000");

        assert_eq!(
            Step::Set(8).apply(&mut bs),
            Err(Error::IndexOutOfRange {
                index: 8,
                length: 8
            })
        );
        assert_eq!(Step::ShiftLeft(0).apply(&mut bs), Err(Error::ZeroCount));
    }
}
