/// One of the six fixed positions in the HH:MM:SS answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotDescriptor {
    /// Position in the answer array
    pub index: usize,
    /// Human-readable label, used for logging only
    pub label: &'static str,
    /// Largest digit this position can hold in any valid time
    ///
    /// The ones-hour entry is nominal: the assigner tightens it to 3 when
    /// the tens-hour digit is 2, keeping the hour at or below 23.
    pub max_digit: u8,
}

/// Answer index of the tens-hour position
pub const HOUR_TENS: usize = 0;
/// Answer index of the ones-hour position
pub const HOUR_ONES: usize = 1;
/// Answer index of the tens-minute position
pub const MINUTE_TENS: usize = 2;
/// Answer index of the ones-minute position
pub const MINUTE_ONES: usize = 3;
/// Answer index of the tens-second position
pub const SECOND_TENS: usize = 4;
/// Answer index of the ones-second position
pub const SECOND_ONES: usize = 5;

/// The six answer positions in assignment order
pub const SLOTS: [SlotDescriptor; 6] = [
    SlotDescriptor {
        index: 0,
        label: "hour tens slot",
        max_digit: 2,
    },
    SlotDescriptor {
        index: 1,
        label: "hour ones slot",
        max_digit: 9,
    },
    SlotDescriptor {
        index: 2,
        label: "minute tens slot",
        max_digit: 5,
    },
    SlotDescriptor {
        index: 3,
        label: "minute ones slot",
        max_digit: 9,
    },
    SlotDescriptor {
        index: 4,
        label: "second tens slot",
        max_digit: 5,
    },
    SlotDescriptor {
        index: 5,
        label: "second ones slot",
        max_digit: 9,
    },
];
