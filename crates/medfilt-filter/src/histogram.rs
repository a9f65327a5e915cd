//! 256-bin histograms and the rank tracking walk
//!
//! Both histogram filters keep a window histogram together with a
//! [`RankTracker`]: a pointer to the bin holding the tracked order statistic
//! and the count of samples strictly below that bin. After the histogram is
//! mutated, [`RankTracker::walk`] restores
//!
//! ```text
//! below <= target < below + hist[current]
//! ```
//!
//! by moving `current` one bin at a time. For the median of a window of odd
//! size `W`, `target = W / 2`.

/// Number of histogram bins (one per 8-bit intensity).
pub(crate) const BINS: usize = 256;

/// Sample counts per intensity value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Histogram {
    bins: [u32; BINS],
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

impl Histogram {
    pub(crate) fn new() -> Self {
        Self { bins: [0; BINS] }
    }

    pub(crate) fn clear(&mut self) {
        self.bins.fill(0);
    }

    #[inline]
    pub(crate) fn add(&mut self, val: u8) {
        self.bins[val as usize] += 1;
    }

    #[inline]
    pub(crate) fn remove(&mut self, val: u8) {
        debug_assert!(self.bins[val as usize] > 0, "removing absent value {val}");
        self.bins[val as usize] -= 1;
    }

    #[inline]
    pub(crate) fn count(&self, bin: usize) -> u32 {
        self.bins[bin]
    }

    /// Total number of samples.
    pub(crate) fn total(&self) -> u32 {
        self.bins.iter().sum()
    }

    /// Number of samples with value strictly below `bin`.
    pub(crate) fn count_below(&self, bin: usize) -> u32 {
        self.bins[..bin].iter().sum()
    }

    /// Add every bin of `other`.
    pub(crate) fn accumulate(&mut self, other: &Histogram) {
        for (dst, &src) in self.bins.iter_mut().zip(other.bins.iter()) {
            *dst += src;
        }
    }

    /// Add `incoming` and subtract `outgoing` bin by bin.
    ///
    /// `outgoing` must be contained in `self`. Returns the number of samples
    /// added and removed in bins strictly below `bound`.
    pub(crate) fn exchange(
        &mut self,
        incoming: &Histogram,
        outgoing: &Histogram,
        bound: usize,
    ) -> (u32, u32) {
        let mut added = 0;
        let mut removed = 0;
        for (bin, dst) in self.bins.iter_mut().enumerate() {
            let a = incoming.bins[bin];
            let r = outgoing.bins[bin];
            *dst = *dst + a - r;
            if bin < bound {
                added += a;
                removed += r;
            }
        }
        (added, removed)
    }
}

/// Running order statistic over a [`Histogram`].
#[derive(Debug, Clone)]
pub(crate) struct RankTracker {
    /// 0-based rank of the tracked sample
    target: u32,
    /// Bin holding the tracked sample
    current: usize,
    /// Samples strictly below `current`
    below: u32,
}

impl RankTracker {
    pub(crate) fn new(target: u32) -> Self {
        Self {
            target,
            current: 0,
            below: 0,
        }
    }

    /// Tracked value.
    #[inline]
    pub(crate) fn value(&self) -> u8 {
        self.current as u8
    }

    /// Recompute the state from scratch by scanning bins upward.
    ///
    /// The histogram must hold more than `target` samples.
    pub(crate) fn reset(&mut self, hist: &Histogram) -> u8 {
        debug_assert!(hist.total() > self.target);
        self.below = 0;
        self.current = BINS - 1;
        for bin in 0..BINS {
            let count = hist.count(bin);
            if self.below + count > self.target {
                self.current = bin;
                break;
            }
            self.below += count;
        }
        if self.below + hist.count(self.current) <= self.target {
            // Too few samples: pin to the top bin rather than run off the end.
            self.below = hist.count_below(BINS - 1);
        }
        self.value()
    }

    /// Account for a sample added to the tracked histogram.
    #[inline]
    pub(crate) fn insert(&mut self, val: u8) {
        if (val as usize) < self.current {
            self.below += 1;
        }
    }

    /// Account for a sample removed from the tracked histogram.
    #[inline]
    pub(crate) fn remove(&mut self, val: u8) {
        if (val as usize) < self.current {
            self.below -= 1;
        }
    }

    /// Account for bulk changes below `current`.
    #[inline]
    pub(crate) fn shift_below(&mut self, added: u32, removed: u32) {
        self.below = self.below + added - removed;
    }

    /// Restore the invariant after the histogram changed.
    ///
    /// Only one direction can move: down while too many samples sit below
    /// `current`, otherwise up while too few sit at or below it.
    pub(crate) fn walk(&mut self, hist: &Histogram) -> u8 {
        if self.below > self.target {
            while self.below > self.target {
                self.current -= 1;
                self.below -= hist.count(self.current);
            }
        } else {
            while self.below + hist.count(self.current) <= self.target {
                self.below += hist.count(self.current);
                self.current += 1;
            }
        }
        debug_assert!(self.holds(hist), "rank invariant broken: {self:?}");
        self.value()
    }

    /// Check the invariant against `hist`, including the `below` count.
    pub(crate) fn holds(&self, hist: &Histogram) -> bool {
        self.below == hist.count_below(self.current)
            && self.below <= self.target
            && self.target < self.below + hist.count(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hist_of(values: &[u8]) -> Histogram {
        let mut h = Histogram::new();
        for &v in values {
            h.add(v);
        }
        h
    }

    #[test]
    fn test_histogram_counts() {
        let mut h = hist_of(&[3, 3, 7, 255, 0]);
        assert_eq!(h.total(), 5);
        assert_eq!(h.count(3), 2);
        assert_eq!(h.count_below(7), 3);
        h.remove(3);
        assert_eq!(h.count(3), 1);
        h.clear();
        assert_eq!(h.total(), 0);
    }

    #[test]
    fn test_exchange_reports_changes_below_bound() {
        let mut window = hist_of(&[1, 2, 5, 9]);
        let outgoing = hist_of(&[1, 9]);
        let incoming = hist_of(&[0, 8]);
        let (added, removed) = window.exchange(&incoming, &outgoing, 5);
        assert_eq!((added, removed), (1, 1));
        assert_eq!(window, hist_of(&[0, 2, 5, 8]));
    }

    #[test]
    fn test_reset_finds_lower_median() {
        let h = hist_of(&[10, 10, 10, 10, 20, 20, 60, 60, 70]);
        let mut t = RankTracker::new(4);
        assert_eq!(t.reset(&h), 20);
        assert_eq!(t.below, 4);
        assert!(t.holds(&h));
    }

    #[test]
    fn test_reset_min_and_max_targets() {
        let h = hist_of(&[5, 9, 200]);
        assert_eq!(RankTracker::new(0).reset(&h), 5);
        assert_eq!(RankTracker::new(2).reset(&h), 200);
    }

    #[test]
    fn test_walk_up_and_down() {
        let mut h = hist_of(&[1, 2, 3, 4, 5]);
        let mut t = RankTracker::new(2);
        assert_eq!(t.reset(&h), 3);

        // Replace the smallest two with large values: median moves up.
        for (out, inc) in [(1, 100), (2, 101)] {
            h.remove(out);
            t.remove(out);
            h.add(inc);
            t.insert(inc);
        }
        assert_eq!(t.walk(&h), 5);
        assert!(t.holds(&h));

        // Replace the largest three with small values: median moves down.
        for (out, inc) in [(100, 0), (101, 0), (5, 1)] {
            h.remove(out);
            t.remove(out);
            h.add(inc);
            t.insert(inc);
        }
        assert_eq!(t.walk(&h), 1);
        assert!(t.holds(&h));
    }

    #[test]
    fn test_walk_stays_on_ties() {
        let mut h = hist_of(&[7; 9]);
        let mut t = RankTracker::new(4);
        assert_eq!(t.reset(&h), 7);
        h.remove(7);
        t.remove(7);
        h.add(7);
        t.insert(7);
        assert_eq!(t.walk(&h), 7);
        assert_eq!(t.below, 0);
    }
}
