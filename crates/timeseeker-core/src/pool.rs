/// Snapshot of a pool's contents, taken before a tentative assignment so the
/// pool can be rolled back if the assignment does not pan out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoint {
    digits: Vec<u8>,
}

impl Checkpoint {
    /// The digits captured by this checkpoint, sorted ascending
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }
}

/// Ordered multiset of the digits not yet assigned to any slot
///
/// The contents are kept sorted ascending, so the first digit found inside a
/// range during a forward scan is also the smallest digit in that range.
/// Removal from a sorted array preserves the ordering, so no re-sorting is
/// ever needed after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitPool {
    remaining: Vec<u8>,
}

impl DigitPool {
    /// Create a pool holding the six input digits
    pub fn new(digits: [u8; 6]) -> Self {
        let mut remaining = digits.to_vec();
        remaining.sort_unstable();
        Self { remaining }
    }

    /// Remove and return the smallest remaining digit within `lo..=hi`
    ///
    /// Returns `None` when no remaining digit falls in the range, leaving the
    /// pool untouched.
    pub fn take_min(&mut self, lo: u8, hi: u8) -> Option<u8> {
        let index = self.remaining.iter().position(|&d| d >= lo && d <= hi)?;
        Some(self.remaining.remove(index))
    }

    /// Remove one occurrence of `value`, returning it
    ///
    /// Equal digits are interchangeable, so which occurrence gets removed is
    /// not observable. Returns `None` when `value` is not in the pool.
    pub fn take_exact(&mut self, value: u8) -> Option<u8> {
        let index = self.remaining.iter().position(|&d| d == value)?;
        Some(self.remaining.remove(index))
    }

    /// Capture the current contents for a later `restore`
    pub fn snapshot(&self) -> Checkpoint {
        Checkpoint {
            digits: self.remaining.clone(),
        }
    }

    /// Replace the contents with those of `checkpoint`, undoing every
    /// removal made since the checkpoint was taken
    pub fn restore(&mut self, checkpoint: &Checkpoint) {
        self.remaining.clear();
        self.remaining.extend_from_slice(&checkpoint.digits);
    }

    /// Number of digits still unassigned
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    /// True when every digit has been assigned
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// The unassigned digits, sorted ascending
    pub fn remaining(&self) -> &[u8] {
        &self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sorts_ascending() {
        let pool = DigitPool::new([9, 3, 0, 7, 1, 4]);
        assert_eq!(pool.remaining(), &[0, 1, 3, 4, 7, 9]);
    }

    #[test]
    fn test_take_min_picks_smallest_in_range() {
        let mut pool = DigitPool::new([9, 3, 0, 7, 1, 4]);
        assert_eq!(pool.take_min(2, 9), Some(3));
        assert_eq!(pool.remaining(), &[0, 1, 4, 7, 9]);
    }

    #[test]
    fn test_take_min_out_of_range() {
        let mut pool = DigitPool::new([6, 6, 7, 8, 9, 9]);
        assert_eq!(pool.take_min(0, 5), None);
        assert_eq!(pool.len(), 6);
    }

    #[test]
    fn test_take_min_removes_one_duplicate() {
        let mut pool = DigitPool::new([5, 5, 5, 0, 0, 9]);
        assert_eq!(pool.take_min(5, 9), Some(5));
        assert_eq!(pool.remaining(), &[0, 0, 5, 5, 9]);
    }

    #[test]
    fn test_take_exact() {
        let mut pool = DigitPool::new([2, 3, 8, 6, 4, 1]);
        assert_eq!(pool.take_exact(6), Some(6));
        assert_eq!(pool.take_exact(6), None);
        assert_eq!(pool.remaining(), &[1, 2, 3, 4, 8]);
    }

    #[test]
    fn test_snapshot_restore_undoes_removals() {
        let mut pool = DigitPool::new([1, 5, 2, 3, 6, 4]);
        let checkpoint = pool.snapshot();

        pool.take_min(0, 9);
        pool.take_min(0, 9);
        assert_eq!(pool.len(), 4);

        pool.restore(&checkpoint);
        assert_eq!(pool.remaining(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_restore_is_repeatable() {
        let mut pool = DigitPool::new([0, 0, 0, 0, 0, 0]);
        let checkpoint = pool.snapshot();

        pool.take_exact(0);
        pool.restore(&checkpoint);
        pool.take_exact(0);
        pool.take_exact(0);
        pool.restore(&checkpoint);

        assert_eq!(pool.len(), 6);
        assert!(!pool.is_empty());
    }
}
