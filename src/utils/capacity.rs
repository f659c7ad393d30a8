/*!
# Capacity Policy

Decides how large the backing grid of a representation has to be for a given logical size.
Capacities double while they are too small and halve while less than
`1 / shrink_divisor` of them is used, never dropping below `floor`.
*/

/// Growth/shrink configuration of a grid dimension.
///
/// # Example
/// ```
/// use digraphs::utils::CapacityPolicy;
///
/// let policy = CapacityPolicy::default().with_floor(4);
/// assert_eq!(policy.grown(4, 5), 8);
/// assert_eq!(policy.shrunk(32, 3), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityPolicy {
    floor: usize,
    shrink_divisor: usize,
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self {
            floor: 16,
            shrink_divisor: 4,
        }
    }
}

impl CapacityPolicy {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the minimum (and initial) capacity
    /// ** Panics if `floor == 0` **
    pub fn with_floor(mut self, floor: usize) -> Self {
        assert!(floor > 0);
        self.floor = floor;
        self
    }

    /// Updates the fraction of used capacity below which the capacity is halved
    /// ** Panics if `divisor < 2` **
    pub fn with_shrink_divisor(mut self, divisor: usize) -> Self {
        assert!(divisor >= 2);
        self.shrink_divisor = divisor;
        self
    }

    /// Returns the minimum capacity
    pub fn floor(&self) -> usize {
        self.floor
    }

    /// Returns the shrink divisor
    pub fn shrink_divisor(&self) -> usize {
        self.shrink_divisor
    }

    /// Returns the capacity needed for `len` elements when starting from `current`
    pub fn grown(&self, current: usize, len: usize) -> usize {
        let mut capacity = current.max(self.floor);
        while capacity < len {
            capacity *= 2;
        }
        capacity
    }

    /// Returns the capacity after removing elements down to `len` when starting from `current`
    pub fn shrunk(&self, current: usize, len: usize) -> usize {
        let mut capacity = current;
        while capacity > self.floor && len < capacity / self.shrink_divisor {
            capacity /= 2;
        }
        capacity.max(self.floor)
    }

    /// Returns the capacity of a freshly built grid holding `len` elements
    pub fn initial_for(&self, len: usize) -> usize {
        self.grown(self.floor, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_by_doubling() {
        let policy = CapacityPolicy::default();
        assert_eq!(policy.grown(16, 16), 16);
        assert_eq!(policy.grown(16, 17), 32);
        assert_eq!(policy.grown(16, 100), 128);
        assert_eq!(policy.grown(0, 3), 16);
        assert_eq!(policy.initial_for(0), 16);
        assert_eq!(policy.initial_for(129), 256);
    }

    #[test]
    fn shrinks_by_halving_down_to_floor() {
        let policy = CapacityPolicy::default();
        assert_eq!(policy.shrunk(128, 32), 128);
        assert_eq!(policy.shrunk(128, 31), 64);
        assert_eq!(policy.shrunk(128, 7), 16);
        assert_eq!(policy.shrunk(128, 0), 16);
        assert_eq!(policy.shrunk(16, 0), 16);
    }

    #[test]
    fn shrink_respects_odd_floor() {
        let policy = CapacityPolicy::default()
            .with_floor(5)
            .with_shrink_divisor(2);
        assert_eq!(policy.grown(5, 6), 10);
        assert_eq!(policy.shrunk(20, 0), 5);
        assert_eq!(policy.shrunk(20, 9), 10);
        assert_eq!(policy.shrink_divisor(), 2);
        assert_eq!(policy.floor(), 5);
    }

    #[test]
    #[should_panic]
    fn zero_floor_is_rejected() {
        let _ = CapacityPolicy::default().with_floor(0);
    }
}
