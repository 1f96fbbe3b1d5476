use tracing::{debug, trace};

use crate::{
    error::{Error, Result},
    set::BitSet,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transform {
    RotateLeft,
    RotateRight,
    ShiftLeft,
    ShiftRight,
}

impl Transform {
    /// Character landing at `index` once `source` is transformed by `count`.
    ///
    /// `count` is already normalized to `1..source.len()`.
    #[inline]
    fn pick(self, source: &[u8], index: usize, count: usize) -> char {
        let length = source.len();
        let byte = match self {
            Transform::RotateLeft => source[(index + count) % length],
            Transform::RotateRight => source[(index + length - count) % length],
            Transform::ShiftLeft if index + count < length => source[index + count],
            Transform::ShiftRight if index >= count => source[index - count],
            Transform::ShiftLeft | Transform::ShiftRight => b'0',
        };
        byte as char
    }
}

/// Whole-vector rotations and shifts.
///
/// All four go through the bit string form: the set is serialized, the string is
/// re-indexed and the result is written back bit by bit. A count of `0` is
/// rejected outright, any other count is reduced modulo `len()` first, and a
/// count that reduces to `0` leaves the set unchanged.
///
/// The write-back goes into a fresh set that replaces `self` only once every bit
/// is in place, so a failure never leaves a half-transformed set behind.
impl BitSet {
    /// Circular rotation towards index `0`: bit `i` takes the value of bit `i + count`.
    ///
    /// # Errors
    /// [`Error::ZeroCount`] if `count == 0`, [`Error::EmptySet`] if the set has no
    /// bits, [`Error::Allocation`] if a temporary buffer cannot be reserved.
    ///
    /// # Examples
    /// ```
    /// use bitkit::set::BitSet;
    ///
    /// let mut bs: BitSet = "1100000000000011".parse().unwrap();
    /// bs.rotate_left(1).unwrap();
    /// assert_eq!(bs.to_string(), "1000000000000111");
    /// ```
    pub fn rotate_left(&mut self, count: usize) -> Result<()> {
        self.transform(Transform::RotateLeft, count)
    }

    /// Circular rotation away from index `0`: bit `i` takes the value of bit `i - count`,
    /// wrapping around.
    ///
    /// # Errors
    /// Same as [`BitSet::rotate_left`].
    pub fn rotate_right(&mut self, count: usize) -> Result<()> {
        self.transform(Transform::RotateRight, count)
    }

    /// Logical shift towards index `0`; the last `count` bits become `0`.
    ///
    /// # Errors
    /// Same as [`BitSet::rotate_left`].
    pub fn shift_left(&mut self, count: usize) -> Result<()> {
        self.transform(Transform::ShiftLeft, count)
    }

    /// Logical shift away from index `0`; the first `count` bits become `0`.
    ///
    /// # Errors
    /// Same as [`BitSet::rotate_left`].
    pub fn shift_right(&mut self, count: usize) -> Result<()> {
        self.transform(Transform::ShiftRight, count)
    }

    fn normalize(&self, count: usize) -> Result<usize> {
        if count == 0 {
            debug!(length = self.len(), "rejected zero rotate/shift count");
            return Err(Error::ZeroCount);
        }
        if self.is_empty() {
            debug!(count, "rejected rotate/shift of an empty bit set");
            return Err(Error::EmptySet);
        }
        Ok(count % self.len())
    }

    fn transform(&mut self, transform: Transform, count: usize) -> Result<()> {
        let count = self.normalize(count)?;
        if count == 0 {
            trace!(?transform, length = self.len(), "count normalized to zero");
            return Ok(());
        }
        trace!(?transform, count, length = self.len(), "transforming bit set");

        let original = self.to_bit_string()?;
        let source = original.as_bytes();

        let mut transformed = String::new();
        transformed
            .try_reserve_exact(source.len())
            .map_err(|_| Error::Allocation {
                bytes: source.len(),
            })?;
        transformed.extend((0..source.len()).map(|index| transform.pick(source, index, count)));

        self.write_back(&transformed)
    }

    fn write_back(&mut self, bits: &str) -> Result<()> {
        let mut staged = BitSet::new(self.len())?;
        for (index, c) in bits.chars().enumerate() {
            staged.set_bit_at(index, super::serialize::bit_from_char(index, c)?)?;
        }
        *self = staged;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use crate::error::Error;
    use crate::set::BitSet;

    fn bits(text: &str) -> BitSet {
        text.parse().unwrap()
    }

    fn random_set(rng: &mut StdRng, length: usize) -> BitSet {
        let mut bs = BitSet::new(length).unwrap();
        for i in 0..length {
            if rng.random_bool(0.5) {
                bs.set_bit_at(i, 1).unwrap();
            }
        }
        bs
    }

    #[test]
    fn rotate_right_moves_last_bit_to_front() {
        let mut bs = bits("1100000000000011");
        bs.rotate_right(1).unwrap();
        assert_eq!(bs.to_string(), "1110000000000001");
    }

    #[test]
    fn rotate_left_moves_first_bit_to_back() {
        let mut bs = bits("1110000000000001");
        bs.rotate_left(1).unwrap();
        assert_eq!(bs.to_string(), "1100000000000011");
        bs.rotate_left(3).unwrap();
        assert_eq!(bs.to_string(), "0000000000011110");
    }

    #[test]
    fn shift_left_drops_leading_bits() {
        let mut bs = bits("1100000000000011");
        bs.shift_left(1).unwrap();
        assert_eq!(bs.to_string(), "1000000000000110");
        bs.shift_left(1).unwrap();
        assert_eq!(bs.to_string(), "0000000000001100");
    }

    #[test]
    fn shift_right_drops_trailing_bits() {
        let mut bs = bits("1000000000000110");
        bs.shift_right(2).unwrap();
        assert_eq!(bs.to_string(), "0010000000000001");
        bs.shift_right(2).unwrap();
        assert_eq!(bs.to_string(), "0000100000000000");
    }

    #[test]
    fn zero_count_is_rejected_without_mutation() {
        let mut bs = bits("10110");
        let before = bs.clone();
        assert_eq!(bs.rotate_left(0), Err(Error::ZeroCount));
        assert_eq!(bs.rotate_right(0), Err(Error::ZeroCount));
        assert_eq!(bs.shift_left(0), Err(Error::ZeroCount));
        assert_eq!(bs.shift_right(0), Err(Error::ZeroCount));
        assert_eq!(bs, before);
    }

    #[test]
    fn count_reducing_to_zero_is_a_noop() {
        let mut bs = bits("10110");
        let before = bs.clone();
        for count in [5usize, 10, 500] {
            bs.rotate_left(count).unwrap();
            bs.rotate_right(count).unwrap();
            bs.shift_left(count).unwrap();
            bs.shift_right(count).unwrap();
            assert_eq!(bs, before, "count {count}");
        }
    }

    #[test]
    fn count_is_normalized_by_length() {
        let mut a = bits("1001101");
        let mut b = a.clone();
        a.rotate_left(3).unwrap();
        b.rotate_left(3 + 7 * 4).unwrap();
        assert_eq!(a, b);

        let mut a = bits("1001101");
        let mut b = a.clone();
        a.shift_right(2).unwrap();
        b.shift_right(9).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_set_cannot_be_transformed() {
        let mut bs = BitSet::new(0).unwrap();
        assert_eq!(bs.rotate_left(1), Err(Error::EmptySet));
        assert_eq!(bs.shift_right(3), Err(Error::EmptySet));
        // the zero check comes first
        assert_eq!(bs.rotate_right(0), Err(Error::ZeroCount));
    }

    #[test]
    fn single_bit_set_is_fixed_by_rotation() {
        let mut bs = bits("1");
        bs.rotate_left(1).unwrap();
        bs.rotate_right(3).unwrap();
        assert_eq!(bs.to_string(), "1");
    }

    #[test]
    fn rotate_round_trips() {
        let mut rng = StdRng::seed_from_u64(42);
        for length in [2usize, 3, 8, 9, 16, 31, 64, 65] {
            let original = random_set(&mut rng, length);
            for n in 1..length {
                let mut bs = original.clone();
                bs.rotate_left(n).unwrap();
                bs.rotate_right(n).unwrap();
                assert_eq!(bs, original, "left/right length {length}, n {n}");

                bs.rotate_right(n).unwrap();
                bs.rotate_left(n).unwrap();
                assert_eq!(bs, original, "right/left length {length}, n {n}");
            }
        }
    }

    #[test]
    fn rotation_preserves_population() {
        let mut rng = StdRng::seed_from_u64(3);
        let original = random_set(&mut rng, 100);
        let mut bs = original.clone();
        for n in [1usize, 13, 64, 99, 250] {
            bs.rotate_right(n).unwrap();
            assert_eq!(bs.count_ones(), original.count_ones());
        }
    }

    #[test]
    fn shifts_zero_fill() {
        let mut rng = StdRng::seed_from_u64(1234);
        for length in [2usize, 9, 24, 33] {
            let original = random_set(&mut rng, length);
            for k in 1..length {
                let mut left = original.clone();
                left.shift_left(k).unwrap();
                for i in 0..length {
                    let expected = if i + k < length {
                        original.get_bit_at(i + k).unwrap()
                    } else {
                        0
                    };
                    assert_eq!(left.get_bit_at(i), Ok(expected), "shl length {length}, k {k}, i {i}");
                }

                let mut right = original.clone();
                right.shift_right(k).unwrap();
                for i in 0..length {
                    let expected = if i >= k {
                        original.get_bit_at(i - k).unwrap()
                    } else {
                        0
                    };
                    assert_eq!(right.get_bit_at(i), Ok(expected), "shr length {length}, k {k}, i {i}");
                }
            }
        }
    }

    #[test]
    fn transforms_keep_spare_cells_clear() {
        let mut bs = bits("1111111111");
        bs.rotate_left(3).unwrap();
        bs.shift_right(1).unwrap();
        assert_eq!(bs.count_ones(), 9);
        assert_eq!(bs.units().len(), 3);
        assert_eq!(bs.units()[2].value(), 0);
    }
}
