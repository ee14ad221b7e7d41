use crate::pool::DigitPool;
use crate::slot::{
    SlotDescriptor, HOUR_ONES, HOUR_TENS, MINUTE_ONES, MINUTE_TENS, SECOND_ONES, SECOND_TENS,
    SLOTS,
};
use crate::DigitSet;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fully assigned 24-hour clock time
///
/// Stored as the six answer digits in slot order, so the derived `Ord` is
/// the chronological order of the times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ClockTime {
    digits: [u8; 6],
}

impl ClockTime {
    /// Accept a candidate answer, checking digit range and the final
    /// component bounds
    fn from_digits(digits: [u8; 6]) -> Option<Self> {
        if digits.iter().any(|&d| d > 9) {
            return None;
        }
        let time = Self { digits };
        if time.hour() <= 23 && time.minute() <= 59 && time.second() <= 59 {
            Some(time)
        } else {
            None
        }
    }

    /// Hour component (0-23)
    pub fn hour(&self) -> u8 {
        self.digits[0] * 10 + self.digits[1]
    }

    /// Minute component (0-59)
    pub fn minute(&self) -> u8 {
        self.digits[2] * 10 + self.digits[3]
    }

    /// Second component (0-59)
    pub fn second(&self) -> u8 {
        self.digits[4] * 10 + self.digits[5]
    }

    /// The six digits in slot order
    pub fn digits(&self) -> [u8; 6] {
        self.digits
    }
}

// Hand-rolled so deserialized digits pass the same acceptance check the
// fitting engine applies; a derived impl would admit times like 99:99:99.
impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawClockTime {
            digits: [u8; 6],
        }

        let raw = RawClockTime::deserialize(deserializer)?;
        ClockTime::from_digits(raw.digits)
            .ok_or_else(|| serde::de::Error::custom("digits do not form a valid 24-hour time"))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

/// Working answer: six slots filled left to right during fitting
#[derive(Debug, Clone, Default)]
struct Answer {
    slots: [Option<u8>; 6],
}

impl Answer {
    fn set(&mut self, slot: &SlotDescriptor, digit: u8) {
        debug_assert!(self.slots[slot.index].is_none());
        self.slots[slot.index] = Some(digit);
        debug!("{} assigned [{}]", slot.label, digit);
    }

    fn finish(&self) -> Option<ClockTime> {
        let mut digits = [0u8; 6];
        for (index, slot) in self.slots.iter().enumerate() {
            digits[index] = (*slot)?;
        }
        ClockTime::from_digits(digits)
    }
}

/// Drives the six-position assignment against a digit pool
///
/// The tens-hour digit and the four minute/second digits are fitted
/// greedily; the ones-hour digit is the single backtracking choice point,
/// retried over ascending candidates with a checkpoint/restore of the pool
/// between attempts.
#[derive(Debug, Clone)]
pub struct Seeker {
    digits: DigitSet,
}

impl Seeker {
    /// Create a seeker for a validated digit set
    pub fn new(digits: DigitSet) -> Self {
        Self { digits }
    }

    /// Find the earliest valid time, or `None` when no assignment of the
    /// six digits forms one
    pub fn earliest(&self) -> Option<ClockTime> {
        let mut pool = DigitPool::new(self.digits.values());
        let mut answer = Answer::default();

        let hour_tens = pool.take_min(0, SLOTS[HOUR_TENS].max_digit)?;
        answer.set(&SLOTS[HOUR_TENS], hour_tens);

        // Hour <= 23: once the tens digit is 2, the ones digit tops out at 3.
        let ones_bound = if hour_tens == 2 {
            3
        } else {
            SLOTS[HOUR_ONES].max_digit
        };

        let checkpoint = pool.snapshot();
        let mut last_tried = None;
        for &candidate in checkpoint.digits() {
            if candidate > ones_bound {
                break;
            }
            // Equal digits are interchangeable; retrying one is pointless.
            if last_tried == Some(candidate) {
                continue;
            }
            last_tried = Some(candidate);

            pool.restore(&checkpoint);
            pool.take_exact(candidate)?;

            let mut attempt = answer.clone();
            attempt.set(&SLOTS[HOUR_ONES], candidate);

            if let Some(time) = fit_minutes_seconds(&mut pool, attempt) {
                debug!("accepted {}", time);
                return Some(time);
            }
            trace!(
                "hour {}{} leaves no minutes/seconds fit, backtracking",
                hour_tens,
                candidate
            );
        }
        None
    }
}

/// Fit the four remaining digits to the minute and second slots, smallest
/// (MM, SS) pair first; `None` when they cannot form a valid minute and
/// second at all
fn fit_minutes_seconds(pool: &mut DigitPool, mut answer: Answer) -> Option<ClockTime> {
    let tens_minute = pool.take_min(0, SLOTS[MINUTE_TENS].max_digit)?;
    answer.set(&SLOTS[MINUTE_TENS], tens_minute);

    let ones_minute = take_ones_minute(pool)?;
    answer.set(&SLOTS[MINUTE_ONES], ones_minute);

    let tens_second = pool.take_min(0, SLOTS[SECOND_TENS].max_digit)?;
    answer.set(&SLOTS[SECOND_TENS], tens_second);

    let ones_second = pool.take_min(0, SLOTS[SECOND_ONES].max_digit)?;
    answer.set(&SLOTS[SECOND_ONES], ones_second);

    answer.finish()
}

/// Choose the ones-minute digit: the smallest of the three remaining that
/// still leaves a digit the second tens slot can hold (<= 5)
///
/// Taking the bare minimum here can strand two digits above 5 for the
/// seconds pair (e.g. remaining {3,4,6,8}: minute 34 leaves seconds {6,8}
/// unfittable, minute 36 leaves {4,8} for second 48).
fn take_ones_minute(pool: &mut DigitPool) -> Option<u8> {
    let remaining = pool.remaining().to_vec();
    for (index, &candidate) in remaining.iter().enumerate() {
        let leaves_second_tens = remaining
            .iter()
            .enumerate()
            .any(|(other, &digit)| other != index && digit <= 5);
        if leaves_second_tens {
            return pool.take_exact(candidate);
        }
    }
    None
}
