//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [ValueSet] used by the
//! full-grid validity check to detect duplicate values within a unit.

/// A set of cell values that is implemented as a bit mask. Each value in the
/// range `1..=max` is represented by one bit of a single word, which makes
/// clearing and membership tests cheap enough to run once per unit during
/// validity checks.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValueSet {
    max: usize,
    len: usize,
    bits: u16
}

impl ValueSet {

    /// Creates a new, empty `ValueSet` which can contain the values `1..=max`.
    ///
    /// # Arguments
    ///
    /// * `max`: The maximum value that can be contained in the created set.
    ///
    /// # Panics
    ///
    /// If `max` is 0 or greater than 16. No supported grid requests such a
    /// set, so this is always a programming error.
    pub fn new(max: usize) -> ValueSet {
        assert!(max >= 1 && max <= 16,
            "value sets hold values from 1 to at most 16, got max {}", max);

        ValueSet {
            max,
            len: 0,
            bits: 0
        }
    }

    fn mask(&self, value: usize) -> u16 {
        assert!(value >= 1 && value <= self.max,
            "value {} is out of range for a set over 1 to {}", value,
            self.max);

        1 << (value - 1)
    }

    /// Indicates whether this set contains the given value.
    ///
    /// # Panics
    ///
    /// If `value` is 0 or greater than the maximum provided at construction
    /// time.
    pub fn contains(&self, value: usize) -> bool {
        self.bits & self.mask(value) != 0
    }

    /// Inserts the given value into this set, such that [ValueSet::contains]
    /// returns `true` for it afterwards.
    ///
    /// This method returns `true` if the set has changed, i.e. the value was
    /// not present before, and `false` otherwise.
    ///
    /// # Panics
    ///
    /// If `value` is 0 or greater than the maximum provided at construction
    /// time.
    pub fn insert(&mut self, value: usize) -> bool {
        let mask = self.mask(value);

        if self.bits & mask == 0 {
            self.bits |= mask;
            self.len += 1;
            true
        }
        else {
            false
        }
    }

    /// Removes all values from this set, such that [ValueSet::contains] will
    /// return `false` for all inputs and [ValueSet::is_empty] will return
    /// `true`.
    pub fn clear(&mut self) {
        self.bits = 0;
        self.len = 0;
    }

    /// Indicates whether this set is empty, i.e. contains no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of values contained in this set.
    pub fn len(&self) -> usize {
        self.len
    }
}
