//! Fit six digits into the earliest valid 24-hour clock time.
//!
//! Given exactly six digits (0-9, in any order), the engine assigns each
//! digit to one of the six HH:MM:SS positions, using every digit exactly
//! once, and reports the earliest time satisfying hour <= 23, minute <= 59
//! and second <= 59 -- or that no assignment does.
//!
//! ```
//! use timeseeker_core::find_earliest;
//!
//! let time = find_earliest(&[1, 5, 2, 3, 6, 4]).unwrap();
//! assert_eq!(time.to_string(), "12:34:56");
//! ```

mod pool;
mod slot;
mod solver;

pub use pool::{Checkpoint, DigitPool};
pub use slot::{SlotDescriptor, SLOTS};
pub use solver::{ClockTime, Seeker};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ways a seek can fail
///
/// Structural problems with the input (`WrongDigitCount`, `DigitOutOfRange`)
/// are detected before the search runs; `NoSolution` means the input was
/// well formed but no assignment of its digits yields a valid time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SeekError {
    /// The input did not hold exactly six values
    #[error("expected exactly 6 digits, got {0}")]
    WrongDigitCount(usize),
    /// An input value was outside 0-9
    #[error("digit out of range 0-9: {0}")]
    DigitOutOfRange(i32),
    /// No assignment of the six digits forms a valid 24-hour time
    #[error("no valid 24-hour time can be formed from the given digits")]
    NoSolution,
}

impl SeekError {
    /// True for the structural-input failures, false for `NoSolution`
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, SeekError::NoSolution)
    }
}

/// A validated set of exactly six digits, each 0-9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DigitSet {
    digits: [u8; 6],
}

impl DigitSet {
    /// Number of digits in every puzzle
    pub const LEN: usize = 6;

    /// Validate a slice of raw values into a digit set
    ///
    /// Rejects anything other than exactly six values in 0-9; negative
    /// values and values of 10 or more are both out of range.
    pub fn new(values: &[i32]) -> Result<Self, SeekError> {
        if values.len() != Self::LEN {
            return Err(SeekError::WrongDigitCount(values.len()));
        }
        let mut digits = [0u8; Self::LEN];
        for (value, digit) in values.iter().zip(digits.iter_mut()) {
            if !(0..=9).contains(value) {
                return Err(SeekError::DigitOutOfRange(*value));
            }
            *digit = *value as u8;
        }
        Ok(Self { digits })
    }

    #[cfg(test)]
    pub(crate) fn from_digits(digits: [u8; 6]) -> Self {
        debug_assert!(digits.iter().all(|&d| d <= 9));
        Self { digits }
    }

    /// The six digits, in input order
    pub fn values(&self) -> [u8; 6] {
        self.digits
    }
}

impl TryFrom<&[i32]> for DigitSet {
    type Error = SeekError;

    fn try_from(values: &[i32]) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl TryFrom<[i32; 6]> for DigitSet {
    type Error = SeekError;

    fn try_from(values: [i32; 6]) -> Result<Self, Self::Error> {
        Self::new(&values)
    }
}

/// Validate the input and find the earliest valid time in one call
pub fn find_earliest(values: &[i32]) -> Result<ClockTime, SeekError> {
    let digits = DigitSet::new(values)?;
    Seeker::new(digits).earliest().ok_or(SeekError::NoSolution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(find_earliest(&[]), Err(SeekError::WrongDigitCount(0)));
    }

    #[test]
    fn test_wrong_count_rejected() {
        assert_eq!(
            find_earliest(&[1, 2, 3, 4, 5]),
            Err(SeekError::WrongDigitCount(5))
        );
        assert_eq!(
            find_earliest(&[1, 2, 3, 4, 5, 6, 7]),
            Err(SeekError::WrongDigitCount(7))
        );
    }

    #[test]
    fn test_negative_digit_rejected() {
        assert_eq!(
            find_earliest(&[4, -1, 4, 5, 9, 9]),
            Err(SeekError::DigitOutOfRange(-1))
        );
    }

    #[test]
    fn test_too_large_digit_rejected() {
        assert_eq!(
            find_earliest(&[4, 10, 4, 5, 9, 9]),
            Err(SeekError::DigitOutOfRange(10))
        );
    }

    #[test]
    fn test_invalid_input_distinct_from_no_solution() {
        assert!(SeekError::WrongDigitCount(0).is_invalid_input());
        assert!(SeekError::DigitOutOfRange(-1).is_invalid_input());
        assert!(!SeekError::NoSolution.is_invalid_input());
    }

    #[test]
    fn test_permutations_of_input_agree() {
        let orderings = [
            [2, 3, 8, 6, 4, 1],
            [1, 2, 3, 4, 6, 8],
            [8, 6, 4, 3, 2, 1],
            [4, 8, 1, 6, 3, 2],
        ];
        let expected = find_earliest(&orderings[0]).unwrap();
        for ordering in &orderings[1..] {
            assert_eq!(find_earliest(ordering).unwrap(), expected);
        }
    }

    #[test]
    fn test_idempotent() {
        let digits = [1, 9, 5, 9, 4, 4];
        assert_eq!(find_earliest(&digits), find_earliest(&digits));
    }

    #[test]
    fn test_digit_set_try_from() {
        let set = DigitSet::try_from([0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(set.values(), [0, 1, 2, 3, 4, 5]);

        let slice: &[i32] = &[9, 9, 9, 9, 9, 9];
        assert!(DigitSet::try_from(slice).is_ok());
    }
}
